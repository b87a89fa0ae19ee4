#![doc = include_str!("../README.md")]

mod error;
mod query;
mod search;
mod types;

pub mod v1 {
    //! Versioned public API for flight types, search, and queries.
    //!
    //! # Types
    //!
    //! - [`Offset`] — the validated rational r = m/n added by `+r` moves
    //! - [`Op`] — the two moves, [`Op::AddOffset`] and [`Op::Invert`]
    //! - [`Step`] — one move and the value it lands on
    //! - [`Bounds`] — path-length cap and denominator/magnitude guards
    //! - [`Flight`] — a serializable round-trip document
    //!
    //! # Search
    //!
    //! - [`shortest_flight`] — BFS for the minimal move sequence
    //! - [`search`] — the m/n entry point, rejecting n = 0
    //! - [`plan_flight`] — search packaged as a [`Flight`]
    //!
    //! # Example — find and replay a round trip
    //!
    //! ```
    //! use boomerang::v1::{query, Bounds, Offset, plan_flight};
    //!
    //! let offset = Offset::new(-1, 2).unwrap();
    //! let flight = plan_flight(offset, &Bounds::default()).unwrap();
    //!
    //! assert_eq!(flight.steps.len(), 4);
    //! assert_eq!(flight.steps[0].value.to_string(), "1/2");
    //! assert_eq!(flight.steps.last().unwrap().value.to_string(), "1");
    //! assert!(query::replay(offset, &flight.steps).is_ok());
    //!
    //! let json = flight.to_json().unwrap();
    //! assert!(json.contains("\"-1/2\""));
    //! ```

    /// Replay and summary functions over recorded step slices.
    ///
    /// # Example — verify a document from the wire
    ///
    /// ```
    /// use boomerang::v1::{query, Flight};
    ///
    /// let json = r#"{
    ///   "offset": "1/2",
    ///   "steps": [
    ///     { "value": "3/2", "op": "add_offset" },
    ///     { "value": "2",   "op": "add_offset" },
    ///     { "value": "1/2", "op": "invert" },
    ///     { "value": "1",   "op": "add_offset" }
    ///   ]
    /// }"#;
    ///
    /// let flight = Flight::from_json(json).unwrap();
    /// assert!(query::replay(flight.offset, &flight.steps).is_ok());
    /// assert_eq!(query::op_counts(&flight.steps), (3, 1));
    /// ```
    pub mod query {
        pub use crate::query::{op_counts, peak_denominator, replay};
    }
    pub use crate::error::{Result, SearchError};
    pub use crate::search::{plan_flight, search, shortest_flight};
    pub use crate::types::{Bounds, Flight, Offset, Op, Step};

    /// The exact-rational value type flights are made of.
    pub use num_rational::Rational64;
}
