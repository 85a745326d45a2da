use super::*;

pub fn handle_request(request: &Request, format: RequestLogFormat) -> Status {
    match format {
        RequestLogFormat::Summary => info!("handling {}", request.summary()),
        RequestLogFormat::Json => match serde_json::to_string(request) {
            Ok(json) => info!("handling {}", json),
            Err(e) => warn!("handling {} (could not serialize: {})", request.summary(), e),
        },
    }
    StatusFactory::of(HttpStatus::Ok)
}

pub fn handle_error(error: &RequestError) -> Status {
    error!("request stream errored: {}", error);
    StatusFactory::of(HttpStatus::InternalServerError)
}

pub fn handle_complete() {
    info!("complete");
}
