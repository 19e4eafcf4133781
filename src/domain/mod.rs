//! Domain entities and their input structs.
//!
//! Entities mirror persisted rows; `New*` structs enumerate exactly the
//! fields a caller may supply and normalize them on construction. Anything
//! the server generates (ids, timestamps, defaults) only ever appears on
//! the entity side.

pub mod campaign;
pub mod email_reply;
pub mod lead;
pub mod organization;
pub mod outbound_email;
pub mod tenant;
pub mod types;
pub mod user;
