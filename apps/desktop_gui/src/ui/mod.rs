//! UI layer for the portfolio window: app shell, page sections, theme, and
//! small presentation helpers.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::PortfolioApp;
