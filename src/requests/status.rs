use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HttpStatus {
    Ok = 200,
    InternalServerError = 500,
}

impl HttpStatus {
    pub fn code(self) -> u16 {
        self as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    pub status: HttpStatus,
}

pub struct StatusFactory;

impl StatusFactory {
    pub fn of(status: HttpStatus) -> Status {
        Status { status }
    }
}
