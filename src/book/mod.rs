//! The book controller: intents in, state mutation, effects out.
//!
//! Hosts construct a [`Book`] with [`Book::bootstrap`], feed it [`Intent`]s
//! through [`Book::reduce`], execute the returned [`Effect`]s (store and
//! media calls, notifications) and render from [`Book::visible`].

mod messages;
mod state;
mod update;
mod view;

pub use messages::Intent;
pub use state::Book;
pub use update::{Effect, Notice};
pub use view::{PageFace, PageSlot, TurnFaces, VisibleContent};
