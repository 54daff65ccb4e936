// Resume comparison: resume text (or PDF) vs a job posting.
// Skills missing from the request are pulled from the texts by the lexicon.

pub mod comparator;
pub mod handlers;
pub mod lexicon;
pub mod models;
pub mod pdf;
