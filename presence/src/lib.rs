//! Session/presence core shared by every visual surface of the agency site.
//!
//! This crate is UI-framework agnostic: it owns the authentication flag, the
//! login-modal state machine, the toast queue, the online/offline theme
//! projection and the route-guard policy. The Leptos client binds these into
//! reactive signals; nothing here performs I/O.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is the single source of truth. It owns a `ModalController`
//! and a `ToastController` that share its lifetime. Consumers subscribe to
//! change notifications and re-derive what they render (`ThemeMode`, gated
//! affordances) instead of caching their own copy of the flag.

pub mod clock;
pub mod error;
pub mod guard;
pub mod identity;
pub mod modal;
pub mod observer;
pub mod session;
pub mod theme;
pub mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::AuthError;
pub use guard::{GuardDecision, GuardPolicy, GuardPolicyKind, HomeRedirectPolicy, PermissivePolicy, RouteGuard};
pub use identity::{Credentials, IdentityError, IdentityVerifier, Verification};
pub use modal::{ModalController, ModalState};
pub use observer::Subscription;
pub use session::{RestoreTicket, Session, SessionStore};
pub use theme::{ThemeMode, derive_mode};
pub use toast::{DEFAULT_TOAST_TTL_MS, Toast, ToastController, ToastId, ToastKind};
