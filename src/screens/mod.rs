//! Screens
//!
//! Every page of the app as a JSON view document.
//!
//! - **router**: path → screen resolution and rendering
//! - **landing**, **wellness**, **vr**, **admin**: static layouts with local selections
//! - **pages**: chat, resources, forum and counseling views over the domain modules

pub mod admin;
pub mod landing;
pub mod pages;
pub mod router;
pub mod vr;
pub mod wellness;

pub use router::{render, render_path, resolve, routes, Screen, ScreenView, ViewError, ViewQuery, ViewRoute};
