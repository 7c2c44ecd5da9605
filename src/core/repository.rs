use crate::core::library::LibraryResult;

// Repository owns one collection of records; iteration follows insertion order.
pub trait Repository<Entity> {
    // create an entity, fails if the id is already taken
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity and bumps its version
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<usize>;

    fn exists(&self, id: &str) -> bool;

    // all entities in insertion order
    fn find_all(&self) -> Vec<Entity>;
}
