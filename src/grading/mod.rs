mod error;
mod model;
mod notify;
mod ports;
mod reconcile;
mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{FetchError, SaveError};
pub use model::{Acknowledgement, DraftEdit, NewParticipant, Participant, COLUMNS};
pub use notify::ToastQueue;
pub use ports::{ParticipantSink, ParticipantSource};
pub use table::GradingTable;
