//! A minimal push-based reactive stream: an `Observable` wraps a producer, and each subscription
//! runs that producer against a fresh `Observer` that guards its handlers against delivery after
//! termination.

#[macro_use]
extern crate log;

pub mod helpers;
pub mod requests;
pub mod stream;

pub use stream::{
    Handlers, Observable, Observer, Producer, StreamError, StreamResult, Subscription, Teardown,
};

use std::{
    any::Any,
    collections::{HashMap, HashSet},
    error::Error,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use helpers::*;
