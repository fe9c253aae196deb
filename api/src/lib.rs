//! Wire types for the NeuroTrack HTTP API.
//!
//! This crate holds the flat transfer objects exchanged at the API boundary,
//! the pagination metadata and the hypermedia envelopes that wrap them. It is
//! shared by the server and by anything that talks to it.

pub mod dto;
pub mod error;
pub mod hypermedia;
pub mod page;

pub use dto::{DailyLogDto, Identified, LimitDto, PredictionDto, ScoreDto};
pub use error::{ErrorBody, NotFoundBody};
pub use hypermedia::{find_link, CollectionResource, Link, MessageResource, Method, Resource};
pub use page::{PageInfo, PagedResult};
