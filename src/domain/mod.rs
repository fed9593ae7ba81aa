// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Customer entity, request/response shapes, business rule errors and the two
// services that drive the customer lifecycle. Persistence is reached only
// through `crate::store::CustomerStore`.
//
// ============================================================================

pub mod customer;
