use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn is_available(&self) -> bool;
    fn loaned_copies(&self) -> i64;
}
