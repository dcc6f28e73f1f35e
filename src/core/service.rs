use crate::domain::model::MusicEntity;
use crate::domain::ports::{LogLevel, Logger};
use crate::utils::error::{CatalogError, Result};

/// Owner of the ordered entity sequence. Entities arrive here already
/// validated by the factory; the service only manages position and answers
/// queries. Insertion order is user-visible list order and is preserved
/// across removals and replacements.
pub struct MusicService {
    entities: Vec<MusicEntity>,
    logger: Box<dyn Logger>,
}

impl MusicService {
    pub fn new(logger: Box<dyn Logger>) -> Self {
        Self {
            entities: Vec::new(),
            logger,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.entities.len() {
            self.logger.log(
                LogLevel::Error,
                &format!(
                    "index {} out of bounds (catalog length {})",
                    index,
                    self.entities.len()
                ),
            );
            return Err(CatalogError::IndexOutOfBounds {
                index,
                len: self.entities.len(),
            });
        }
        Ok(())
    }

    /// Appends to the end of the catalog.
    pub fn add(&mut self, entity: MusicEntity) {
        self.logger.log(
            LogLevel::Info,
            &format!("added {} '{}'", entity.kind(), entity.name()),
        );
        self.entities.push(entity);
    }

    /// Removes the entity at `index`, shifting the tail down. Returns the
    /// removed entity.
    pub fn remove_at(&mut self, index: usize) -> Result<MusicEntity> {
        self.check_index(index)?;
        let removed = self.entities.remove(index);
        self.logger.log(
            LogLevel::Info,
            &format!("removed {} '{}' at {}", removed.kind(), removed.name(), index),
        );
        Ok(removed)
    }

    /// Substitutes the entity at `index`, returning the displaced one.
    /// "Edit" in the UI is create-new-then-substitute through this method,
    /// never in-place field mutation.
    pub fn replace_at(&mut self, index: usize, entity: MusicEntity) -> Result<MusicEntity> {
        self.check_index(index)?;
        self.logger.log(
            LogLevel::Info,
            &format!("replaced index {} with {} '{}'", index, entity.kind(), entity.name()),
        );
        Ok(std::mem::replace(&mut self.entities[index], entity))
    }

    /// A read view in storage order. Cloned out, so mutating the returned
    /// Vec never touches internal storage.
    pub fn list_all(&self) -> Vec<MusicEntity> {
        self.entities.clone()
    }

    /// Sum of `duration()` over every entity in storage order. Albums and
    /// collections report 0 (see the model contract) and are traversed but
    /// contribute nothing.
    pub fn total_duration(&self) -> u64 {
        self.entities.iter().map(|e| u64::from(e.duration())).sum()
    }
}
