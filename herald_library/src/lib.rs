//! Subject/observer message broadcasting.
//!
//! A [`Subject`] keeps an ordered list of non-owning observer references and pushes
//! its current message to all of them on [`MessageSubject::notify`].
//! An [`Observer`] attaches itself to its subject when created and detaches itself
//! when dropped, so a subject never delivers to an observer that no longer exists.
//!
//! Nothing in this crate prints anything: all human-readable output is emitted
//! as [`Notice`]s into a [`NoticeSink`] provided by the caller.

pub use notice::*;
pub use numbering::*;
pub use observer::*;
pub use subject::*;
pub use traits::*;

mod notice;
mod numbering;
mod observer;
mod subject;
mod traits;
