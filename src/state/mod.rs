//! State management module
//!
//! This module holds the per-request state of every page and the typed forms

pub mod dashboard;
pub mod forms;
pub mod page;
pub mod resources;

// Re-export commonly used state components
pub use dashboard::DashboardPage;
pub use forms::{AchievementForm, CategoryForm, LocalizedField, ProgressForm, ResourceForm, RewardForm};
pub use page::{Confirmation, LoadPhase, Modal, PageState, Resource, ResourcePage};
pub use resources::{Achievements, Categories, Progress, Rewards};
