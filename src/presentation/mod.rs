//! Pure presentation logic for the product page and the admin live preview.
//!
//! Everything here is a synchronous computation over already-fetched (or
//! draft) data: no I/O, no failure mode. Missing fields degrade to empty
//! strings or `"N/A"`, never to an error.

mod lists;
mod resolver;
mod spec_slots;

pub use lists::{join_list, split_list};
pub use resolver::{
    FeatureHighlight, ProductContent, ProductDisplay, SectionContent, SpecTile, VariantContent,
    VariantOption, resolve,
};
pub use spec_slots::{SPEC_SLOTS, SpecSlot, normalize_key, resolve_slot};
