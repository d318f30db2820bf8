// Résumé ingestion: document text extraction, personal-data redaction,
// section detection. Everything here is synchronous and stateless.

pub mod extractor;
pub mod parser;
pub mod privacy;
pub mod sections;
