//! Screens: descriptors produced by route factories, and the instances that
//! live on navigation stacks.
//!
//! A [`ScreenDescriptor`] is what the UI layer hands us: a type name plus the
//! two capabilities the engine queries, [`ModalBehavior`] and `hosts_stack`.
//! A [`Screen`] is one instance of a descriptor pushed under a route, with a
//! process-unique [`ScreenId`].

use std::any::TypeId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// ---------------------------------------------------------------------------
// ModalBehavior
// ---------------------------------------------------------------------------

/// Presentation attribute attached to a screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModalBehavior {
    /// Whether the screen opens a new modal context when navigated to.
    pub modal: bool,
}

impl ModalBehavior {
    /// Presented modally.
    pub const MODAL: Self = Self { modal: true };
    /// Pushed inline onto the current stack.
    pub const INLINE: Self = Self { modal: false };
}

// ---------------------------------------------------------------------------
// ScreenDescriptor
// ---------------------------------------------------------------------------

/// Capabilities of a screen type, as produced by a route factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenDescriptor {
    /// Screen type name (e.g. "ContentPage").
    pub type_name: String,
    /// Rust type identity, when the descriptor was derived from a type.
    pub type_id: Option<TypeId>,
    /// Modal presentation attribute.
    pub modal: ModalBehavior,
    /// Whether this screen can own a navigation stack and accept pushes.
    pub hosts_stack: bool,
}

impl ScreenDescriptor {
    /// Create a navigation-capable, non-modal descriptor.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            type_id: None,
            modal: ModalBehavior::INLINE,
            hosts_stack: true,
        }
    }

    /// Create a descriptor named after the Rust type `T`.
    ///
    /// The name is the last path component of [`std::any::type_name`], with
    /// generic arguments stripped.
    pub fn of<T: 'static>() -> Self {
        let full = std::any::type_name::<T>();
        let base = full.split('<').next().unwrap_or(full);
        let short = base.rsplit("::").next().unwrap_or(base);
        Self {
            type_id: Some(TypeId::of::<T>()),
            ..Self::new(short)
        }
    }

    /// Set the modal attribute (builder).
    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = ModalBehavior { modal };
        self
    }

    /// Set whether the screen can host a stack (builder).
    pub fn hosts_stack(mut self, hosts_stack: bool) -> Self {
        self.hosts_stack = hosts_stack;
        self
    }

    /// Whether screens of this type open a modal context.
    pub fn is_modal(&self) -> bool {
        self.modal.modal
    }
}

/// A Rust type that can be registered as a route with
/// [`RouteRegistry::register_type`](crate::route::RouteRegistry::register_type).
///
/// The default descriptor is an inline, navigation-capable screen named after
/// the type. Override [`descriptor`](ScreenType::descriptor) to mark it modal
/// or non-navigable.
pub trait ScreenType: 'static {
    fn descriptor() -> ScreenDescriptor
    where
        Self: Sized,
    {
        ScreenDescriptor::of::<Self>()
    }
}

// ---------------------------------------------------------------------------
// ScreenId / Screen
// ---------------------------------------------------------------------------

/// Process-unique identity of a screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(u64);

impl ScreenId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One screen instance, as held by a navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    id: ScreenId,
    route: String,
    descriptor: ScreenDescriptor,
}

impl Screen {
    /// Instantiate `descriptor` under `route` with a fresh id.
    pub fn new(route: impl Into<String>, descriptor: ScreenDescriptor) -> Self {
        Self {
            id: ScreenId::next(),
            route: route.into(),
            descriptor,
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// The route this screen was pushed under.
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn descriptor(&self) -> &ScreenDescriptor {
        &self.descriptor
    }

    pub fn type_name(&self) -> &str {
        &self.descriptor.type_name
    }

    pub fn is_modal(&self) -> bool {
        self.descriptor.is_modal()
    }

    pub fn hosts_stack(&self) -> bool {
        self.descriptor.hosts_stack
    }

    /// Whether this screen was created from the Rust type `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.descriptor.type_id == Some(TypeId::of::<T>())
    }
}
