// Unit tests for error mapping: pure domain logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::Stars, "stars must be between 1 and 3");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidStars);
    assert_eq!(app.status().as_u16(), 400);

    let missing = DomainError::validation(ValidationKind::MissingField, "name is required");
    let app: AppError = missing.into();
    assert_eq!(app.code(), ErrorCode::MissingField);
    assert_eq!(app.status().as_u16(), 400);

    let other = DomainError::validation_other("bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_conflicts() {
    let dup = DomainError::conflict(ConflictKind::DuplicateName, "name taken");
    assert!(dup.is_duplicate_name());
    let app: AppError = dup.into();
    assert_eq!(app.code().as_str(), "DUPLICATE_NAME");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::RankingEntry, "no entry");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "ENTRY_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn storage_failures_are_500() {
    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 500);

    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "failed");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn db_err_record_not_found_maps_through_domain() {
    let app: AppError = sea_orm::DbErr::RecordNotFound("ranking".into()).into();
    assert_eq!(app.status().as_u16(), 404);
}
