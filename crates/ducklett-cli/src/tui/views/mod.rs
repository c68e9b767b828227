//! Ratatui widgets for the page.
//!
//! Each view borrows a slice of the [`ScreenViewModel`](super::view_model::ScreenViewModel)
//! plus the active [`Palette`](super::palette::Palette) and only maps them to cells.

pub mod character;
pub mod confirmation;
pub mod decision;
pub mod effects;
pub mod form;
pub mod status_bar;

pub use character::{CharacterView, MessageView};
pub use confirmation::ConfirmationView;
pub use decision::{ButtonView, DecisionView};
pub use effects::{BubbleLayer, ReactionLayer};
pub use form::FormView;
pub use status_bar::{HeaderView, StatusBarView};
