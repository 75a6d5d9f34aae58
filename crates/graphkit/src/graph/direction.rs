//! Direction markers for [`Graph`](super::Graph).
//!
//! The marker decides at compile time whether an edge is a one-way relation or is seen from
//! both of its endpoints.

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

pub trait Direction: sealed::Sealed + 'static {
    const DIRECTED: bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

impl Direction for Directed {
    const DIRECTED: bool = true;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl Direction for Undirected {
    const DIRECTED: bool = false;
}
