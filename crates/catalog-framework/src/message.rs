//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a `ResourceActor`.
///
/// The variants are the CRUD lifecycle of a keyed record:
///
/// - **Create**: builds a record from [`ActorEntity::Create`] and stores it under its own key.
/// - **Get**: returns a snapshot of the record, or `None` when the key is unknown.
/// - **Update**: applies [`ActorEntity::Update`] and returns the new state.
/// - **Delete**: removes the record.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
