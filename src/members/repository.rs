pub mod memory_member_repository;

use crate::core::repository::Repository;
use crate::members::domain::model::MemberEntity;

pub trait MemberRepository: Repository<MemberEntity> {
    // members currently holding the given isbn
    fn find_by_borrowed(&self, isbn: &str) -> Vec<MemberEntity>;
}
