use super::attribute::Attribute;
use super::entity::{Entity, FieldSlot};
use super::relationship::Relationship;
use log::warn;
use std::ops::Deref;

/// All entities of one compilation run, in document order.
///
/// The registry is built once and never changes afterwards, so the
/// resolution caches stored in each [`Entity`] stay valid for as long as
/// the registry lives. Cloning an entity clears its caches.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entities: Vec<Entity>,
}

impl Registry {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityRef<'_>> {
        (0..self.entities.len()).map(move |index| self.at(index))
    }

    /// First entity named `name`
    pub fn get(&self, name: &str) -> Option<EntityRef<'_>> {
        self.position(name).map(|index| self.at(index))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entities.iter().position(|entity| entity.name() == name)
    }

    fn at(&self, index: usize) -> EntityRef<'_> {
        EntityRef {
            registry: self,
            index,
        }
    }
}

/// An entity together with the registry it lives in. All inheritance-aware
/// accessors live here.
#[derive(Debug, Clone, Copy)]
pub struct EntityRef<'a> {
    registry: &'a Registry,
    index: usize,
}

impl<'a> Deref for EntityRef<'a> {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        self.entity()
    }
}

impl<'a> EntityRef<'a> {
    pub fn entity(&self) -> &'a Entity {
        &self.registry.entities[self.index]
    }

    /// The entity named by `parentEntity`. Unknown names resolve to `None`.
    pub fn parent(&self) -> Option<EntityRef<'a>> {
        let entity = self.entity();
        let parent = entity.parent.get_or_init(|| {
            let parent_name = entity.parent_name()?;
            let found = self.registry.position(parent_name);
            if found.is_none() {
                warn!(
                    "Entity '{}' inherits from unknown entity '{}'; treating it as a root",
                    entity.name(),
                    parent_name
                );
            }
            found
        });
        parent.map(|index| self.registry.at(index))
    }

    /// Parent, grandparent and so on. A chain that loops back onto an entity
    /// already visited ends there.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            current: *self,
            visited: vec![self.index],
        }
    }

    /// Own attributes followed by those of every ancestor, nearest first
    pub fn all_attributes(&self) -> Vec<&'a Attribute> {
        let slots = self
            .entity()
            .all_attributes
            .get_or_init(|| self.collect_slots(|entity| entity.attributes().len()));

        slots
            .iter()
            .map(|slot| &self.registry.entities[slot.entity].attributes()[slot.field])
            .collect()
    }

    /// Own relationships followed by those of every ancestor, nearest first
    pub fn all_relationships(&self) -> Vec<&'a Relationship> {
        let slots = self
            .entity()
            .all_relationships
            .get_or_init(|| self.collect_slots(|entity| entity.relationships().len()));

        slots
            .iter()
            .map(|slot| &self.registry.entities[slot.entity].relationships()[slot.field])
            .collect()
    }

    /// The nearest constraint declared on this entity or one of its ancestors
    pub fn effective_uniqueness_constraint(&self) -> Option<&'a str> {
        let owner = self.entity().constraint_owner.get_or_init(|| {
            std::iter::once(*self)
                .chain(self.ancestors())
                .find(|entity| entity.uniqueness_constraint().is_some())
                .map(|entity| entity.index)
        });

        owner.and_then(|index| self.registry.entities[index].uniqueness_constraint())
    }

    fn collect_slots(&self, field_count: impl Fn(&Entity) -> usize) -> Vec<FieldSlot> {
        std::iter::once(*self)
            .chain(self.ancestors())
            .flat_map(|owner| {
                (0..field_count(owner.entity())).map(move |field| FieldSlot {
                    entity: owner.index,
                    field,
                })
            })
            .collect()
    }
}

pub struct Ancestors<'a> {
    current: EntityRef<'a>,
    visited: Vec<usize>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = EntityRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let parent = self.current.parent()?;
        if self.visited.contains(&parent.index) {
            return None;
        }
        self.visited.push(parent.index);
        self.current = parent;
        Some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::FieldInfo;
    use crate::model::user_info::UserInfo;

    fn attr(name: &str) -> Attribute {
        Attribute::new(FieldInfo::new(name, false, UserInfo::default()), "String", None)
    }

    fn rel(name: &str) -> Relationship {
        Relationship::new(FieldInfo::new(name, true, UserInfo::default()), false, false, None)
    }

    fn entity(name: &str, parent: Option<&str>, attrs: &[&str], constraint: Option<&str>) -> Entity {
        Entity::new(
            name,
            parent,
            attrs.iter().map(|a| attr(a)).collect(),
            Vec::new(),
            constraint,
        )
    }

    fn names(attrs: Vec<&Attribute>) -> Vec<&str> {
        attrs.into_iter().map(Attribute::name).collect()
    }

    #[test]
    fn test_three_level_chain() {
        // Child first so the parents are forward references
        let registry = Registry::new(vec![
            entity("A", Some("B"), &["a1", "a2"], None),
            entity("B", Some("C"), &["b1"], None),
            entity("C", None, &["c1", "c2"], None),
        ]);

        let a = registry.get("A").unwrap();
        assert_eq!(names(a.all_attributes()), vec!["a1", "a2", "b1", "c1", "c2"]);
        assert_eq!(names(a.all_attributes()), vec!["a1", "a2", "b1", "c1", "c2"]);
        assert_eq!(a.attributes().len(), 2);

        let b = registry.get("B").unwrap();
        assert_eq!(names(b.all_attributes()), vec!["b1", "c1", "c2"]);
        assert_eq!(b.attributes().len(), 1);
    }

    #[test]
    fn test_relationships_accumulate() {
        let registry = Registry::new(vec![
            Entity::new("Child", Some("Base"), Vec::new(), vec![rel("owner")], None),
            Entity::new("Base", None, Vec::new(), vec![rel("creator"), rel("tags")], None),
        ]);

        let child = registry.get("Child").unwrap();
        let first: Vec<_> = child.all_relationships().into_iter().map(Relationship::name).collect();
        let second: Vec<_> = child.all_relationships().into_iter().map(Relationship::name).collect();
        assert_eq!(first, vec!["owner", "creator", "tags"]);
        assert_eq!(first, second);
        assert_eq!(child.relationships().len(), 1);
    }

    #[test]
    fn test_no_parent_means_own_fields_only() {
        let registry = Registry::new(vec![entity("Solo", None, &["x"], None)]);
        let solo = registry.get("Solo").unwrap();
        assert!(solo.parent().is_none());
        assert_eq!(names(solo.all_attributes()), vec!["x"]);
    }

    #[test]
    fn test_dangling_parent_is_tolerated() {
        let registry = Registry::new(vec![entity("Orphan", Some("Missing"), &["x"], None)]);
        let orphan = registry.get("Orphan").unwrap();
        assert!(orphan.parent().is_none());
        assert_eq!(names(orphan.all_attributes()), vec!["x"]);
        assert_eq!(orphan.effective_uniqueness_constraint(), None);
    }

    #[test]
    fn test_constraint_inheritance() {
        let registry = Registry::new(vec![
            entity("Admin", Some("User"), &[], None),
            entity("User", Some("Base"), &[], Some("email")),
            entity("Base", None, &[], Some("id")),
            entity("Plain", None, &[], None),
        ]);

        assert_eq!(
            registry.get("Admin").unwrap().effective_uniqueness_constraint(),
            Some("email")
        );
        assert_eq!(
            registry.get("User").unwrap().effective_uniqueness_constraint(),
            Some("email")
        );
        assert_eq!(
            registry.get("Base").unwrap().effective_uniqueness_constraint(),
            Some("id")
        );
        assert_eq!(registry.get("Plain").unwrap().effective_uniqueness_constraint(), None);
    }

    #[test]
    fn test_cyclic_chain_terminates() {
        let registry = Registry::new(vec![
            entity("A", Some("B"), &["a"], None),
            entity("B", Some("A"), &["b"], None),
        ]);

        let a = registry.get("A").unwrap();
        assert_eq!(names(a.all_attributes()), vec!["a", "b"]);
        assert_eq!(a.ancestors().count(), 1);
        assert_eq!(a.effective_uniqueness_constraint(), None);
    }

    #[test]
    fn test_cloned_entity_resolves_in_new_registry() {
        let registry = Registry::new(vec![
            entity("Pad", None, &[], None),
            entity("Base", None, &["b1", "b2"], Some("b1")),
            entity("Child", Some("Base"), &["c"], None),
        ]);
        let child = registry.get("Child").unwrap();
        assert_eq!(names(child.all_attributes()), vec!["c", "b1", "b2"]);
        assert_eq!(child.effective_uniqueness_constraint(), Some("b1"));

        let other = Registry::new(vec![child.entity().clone(), entity("Base", None, &["x"], None)]);
        let moved = other.get("Child").unwrap();
        assert!(moved.entity().parent.get().is_none());
        assert_eq!(moved.parent().map(|p| p.name().to_string()), Some("Base".to_string()));
        assert_eq!(names(moved.all_attributes()), vec!["c", "x"]);
        assert_eq!(moved.effective_uniqueness_constraint(), None);
    }

    #[test]
    fn test_parent_resolution_is_cached() {
        let registry = Registry::new(vec![
            entity("A", Some("B"), &[], None),
            entity("B", None, &[], None),
        ]);

        let a = registry.get("A").unwrap();
        assert!(a.entity().parent.get().is_none());
        assert_eq!(a.parent().map(|p| p.name().to_string()), Some("B".to_string()));
        assert_eq!(a.entity().parent.get(), Some(&Some(1)));
    }
}
