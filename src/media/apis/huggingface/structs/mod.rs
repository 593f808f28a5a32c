pub mod huggingface_error_response;
