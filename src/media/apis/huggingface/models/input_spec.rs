use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec<'a> {
    pub inputs: &'a str,
    pub parameters: InputParameters,
}

#[derive(Debug, Serialize)]
pub struct InputParameters {
    pub width: u32,
    pub height: u32,
    pub guidance_scale: f64,
    pub num_inference_steps: u32,
}
