// ============================================================================
// Customer Domain
// ============================================================================
//
// - Value objects (DocumentType, CustomerStatus)
// - Entity (Customer, NewCustomer)
// - Requests / responses exchanged with callers
// - Errors (CustomerError, FieldError)
// - CustomerService: create, read, list, update, soft delete, status changes
// - ValidationService: "is this customer active?" checks
//
// ============================================================================

pub mod value_objects;
pub mod entity;
pub mod requests;
pub mod responses;
pub mod errors;
pub mod service;
pub mod validation;

// Re-export for convenience
pub use value_objects::*;
pub use entity::*;
pub use requests::*;
pub use responses::*;
pub use errors::*;
pub use service::CustomerService;
pub use validation::ValidationService;
