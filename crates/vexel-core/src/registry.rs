//! Scene-registry collaborator traits.
//!
//! The engine core never owns shape collections. Shapes announce themselves
//! to an opaque registry at attachment and teardown boundaries, identified by
//! their raw ids. Game-object and UI registries are distinct capabilities so
//! the classification of a shape is fixed by the handle supplied at the
//! boundary rather than checked at runtime.

use uuid::Uuid;

/// Opaque sink owning a collection of shapes.
pub trait SceneRegistry {
    /// Registers a shape with this registry.
    fn attach(&mut self, shape: Uuid);

    /// Removes a shape from this registry.
    fn detach(&mut self, shape: Uuid);

    /// Drops any entity tags held for a shape.
    fn remove_tag(&mut self, shape: Uuid);
}

/// Registry capability for shapes participating in game logic.
pub trait GameObjectRegistry: SceneRegistry {}

/// Registry capability for shapes rendered as UI elements.
pub trait UiRegistry: SceneRegistry {}
