use chrono::Utc;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::members::domain::Member;
use crate::members::domain::model::MemberEntity;
use crate::members::repository::MemberRepository;

#[derive(Debug, Default)]
pub struct MemoryMemberRepository {
    members: Vec<MemberEntity>,
}

impl MemoryMemberRepository {
    pub fn new() -> Self {
        Self {
            members: vec![],
        }
    }

    fn position(&self, member_id: &str) -> Option<usize> {
        self.members.iter().position(|m| m.member_id == member_id)
    }
}

impl Repository<MemberEntity> for MemoryMemberRepository {
    fn create(&mut self, entity: &MemberEntity) -> LibraryResult<usize> {
        if self.exists(entity.member_id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("member with id {} already exists", entity.member_id).as_str()));
        }
        self.members.push(entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &MemberEntity) -> LibraryResult<usize> {
        let ndx = self.position(entity.member_id.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("member with id {} not found", entity.member_id).as_str()))?;
        let mut updated = entity.clone();
        updated.version = self.members[ndx].version + 1;
        updated.updated_at = Utc::now().naive_utc();
        self.members[ndx] = updated;
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<MemberEntity> {
        self.members.iter()
            .find(|m| m.member_id == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("member with id {} not found", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        let ndx = self.position(id).ok_or_else(|| LibraryError::not_found(
            format!("member with id {} not found", id).as_str()))?;
        self.members.remove(ndx);
        Ok(1)
    }

    fn exists(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn find_all(&self) -> Vec<MemberEntity> {
        self.members.clone()
    }
}

impl MemberRepository for MemoryMemberRepository {
    fn find_by_borrowed(&self, isbn: &str) -> Vec<MemberEntity> {
        self.members.iter()
            .filter(|m| m.has_borrowed(isbn))
            .cloned()
            .collect()
    }
}
