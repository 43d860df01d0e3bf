use std::{error::Error, fmt::Display};

use crate::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    InvalidMove(Action),
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::InvalidMove(action) => {
                write!(f, "cannot play at {action} because it is already occupied")
            }
        }
    }
}

impl Error for PlayError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    BadLength,
    BadRowCount,
    UnknownCell(char),
    BadCoordinate,
    OutOfBounds,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ParseError::*;
        match self {
            UnknownCell(c) => write!(f, "unknown cell {c:?}, expected X, O or -"),
            _ => write!(f, "{}", match self {
                BadLength => "every row must have exactly 3 cells",
                BadRowCount => "a board must have exactly 3 rows separated by '/'",
                BadCoordinate => "expected a coordinate in the form row,col",
                OutOfBounds => "coordinates must be between 0 and 2",
                UnknownCell(_) => unreachable!(),
            }),
        }
    }
}

impl Error for ParseError {}
