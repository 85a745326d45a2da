#[macro_use]
extern crate log;

use pushstream::helpers::{config::build_config, real_filesystem};
use pushstream::requests::*;
use pushstream::{Handlers, Observable};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let conf = match build_config() {
        Ok(conf) => conf,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if conf.happy_exit {
        return;
    }
    debug!("{:#?}", conf);

    let requests = match &conf.requests_file {
        Some(path) => match load_requests(path, &real_filesystem()) {
            Ok(requests) => requests,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => requests_mock(),
    };

    let requests_stream = Observable::<Request, RequestError>::from(requests);
    let log_format = conf.request_log;
    for i in 0..conf.subscriptions {
        info!("subscription {}", i + 1);
        let subscription = requests_stream.subscribe(
            Handlers::new()
                .on_next(move |request| {
                    handle_request(&request, log_format);
                })
                .on_error(|error| {
                    handle_error(&error);
                })
                .on_complete(handle_complete),
        );
        if conf.unsubscribe_immediately {
            subscription.unsubscribe();
        }
    }
    info!("done");
}
