//! Application state
//!
//! `ViewerState` holds everything except GPU resources, so the reveal and
//! input rules can be tested without a window. `App` adds the renderer.

use crate::book::{layout_book, FlipEvent, PageFlipController};
use crate::config::ViewerConfig;
use crate::input::{Action, InputState};
use crate::photo::{required_photos, Album, PhotoError};
use crate::render::BookRenderer;
use crate::ui::{draw_message, draw_status, NavButtons};
use macroquad::prelude::*;

/// Where the album stands
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoStatus {
    /// No photos chosen yet
    Waiting,
    /// Album loaded with this many photos
    Loaded(usize),
    /// Last attempt failed
    Failed(String),
}

/// What the frame loop should do after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    OpenPhotos,
    Quit,
}

pub struct ViewerState {
    pub config: ViewerConfig,
    pub controller: PageFlipController,
    pub status: PhotoStatus,
}

impl ViewerState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            controller: PageFlipController::new(config.flip_config()),
            config,
            status: PhotoStatus::Waiting,
        }
    }

    /// The book (and its buttons) appear once every page side has a photo,
    /// or straight away when configured to show a plain book.
    pub fn book_visible(&self) -> bool {
        matches!(self.status, PhotoStatus::Loaded(_)) || self.config.show_without_photos
    }

    /// Record the outcome of a photo load. A new album starts a closed book.
    ///
    /// Returns true when the album was accepted; an album that leaves any
    /// page side empty is treated as a failed load.
    pub fn photos_loaded(&mut self, result: &Result<Album, PhotoError>) -> bool {
        let page_count = self.config.page_count;
        match result {
            Ok(album) if album.is_complete(page_count) => {
                println!("Loaded {} photos", album.len());
                self.controller = PageFlipController::new(self.config.flip_config());
                self.status = PhotoStatus::Loaded(album.len());
                true
            }
            Ok(album) => {
                self.load_failed(&PhotoError::NotEnoughPhotos {
                    required: required_photos(page_count),
                    got: album.len(),
                });
                false
            }
            Err(e) => {
                self.load_failed(e);
                false
            }
        }
    }

    fn load_failed(&mut self, e: &PhotoError) {
        eprintln!("Failed to load photos: {}", e);
        // A good album already on screen stays up
        if !matches!(self.status, PhotoStatus::Loaded(_)) {
            self.status = PhotoStatus::Failed(e.to_string());
        }
    }

    pub fn handle(&mut self, action: Action) -> Flow {
        match action {
            Action::NextPage | Action::PreviousPage => {
                if self.book_visible() {
                    action.apply(&mut self.controller);
                }
                Flow::Continue
            }
            Action::OpenPhotos => Flow::OpenPhotos,
            Action::Quit => Flow::Quit,
        }
    }

    pub fn tick(&mut self, dt: f32) -> Option<FlipEvent> {
        let event = self.controller.advance(dt);
        if let Some(e) = event {
            println!("Finished turning {} ({:?})", e.hinge.label(), e.direction);
        }
        event
    }

    /// Prompt shown while the book is hidden
    pub fn prompt(&self) -> Vec<String> {
        let required = required_photos(self.config.page_count);
        let mut lines = Vec::new();
        if let PhotoStatus::Failed(msg) = &self.status {
            lines.push(msg.clone());
        }
        if cfg!(target_arch = "wasm32") {
            lines.push(format!("Add {} photos to assets/photos to fill the book", required));
        } else {
            lines.push(format!("Press O to choose {} photos", required));
        }
        lines
    }

    pub fn status_line(&self) -> String {
        let c = &self.controller;
        let position = if !c.cover_open() {
            "Cover".to_string()
        } else {
            format!("Page {}/{}", c.cursor(), c.page_count())
        };
        match self.status {
            PhotoStatus::Loaded(n) => format!("{} - {} photos", position, n),
            _ => position,
        }
    }
}

pub struct App {
    pub state: ViewerState,
    pub input: InputState,
    renderer: BookRenderer,
}

impl App {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            state: ViewerState::new(config),
            input: InputState::new(),
            renderer: BookRenderer::new(),
        }
    }

    pub fn set_photos(&mut self, result: Result<Album, PhotoError>) {
        let accepted = self.state.photos_loaded(&result);
        match &result {
            Ok(album) if accepted => self.renderer.set_album(album),
            _ => {}
        }
    }

    fn buttons(&self) -> NavButtons {
        NavButtons::layout(screen_width(), screen_height(), self.state.book_visible())
    }

    /// Poll input, advance the animation, and return what the loop should do
    pub fn update(&mut self, dt: f32) -> Flow {
        self.input.navigation_enabled = self.state.book_visible();
        let mut flow = Flow::Continue;
        for action in self.input.poll(&self.buttons()) {
            match self.state.handle(action) {
                Flow::Continue => {}
                other => flow = other,
            }
        }
        self.state.tick(dt);
        flow
    }

    pub fn draw(&self) {
        clear_background(crate::render::BACKGROUND_COLOR);

        if self.state.book_visible() {
            let layout = layout_book(screen_width(), screen_height());
            self.renderer.draw(&self.state.controller, layout);
            self.buttons().draw();
            draw_status(&self.state.status_line());
        } else {
            let lines = self.state.prompt();
            let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
            draw_message(&lines, Color::new(0.1, 0.1, 0.12, 1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Transition;
    use std::io::Cursor;

    fn config(pages: usize) -> ViewerConfig {
        ViewerConfig {
            page_count: pages,
            ..ViewerConfig::default()
        }
    }

    /// A decoded album with a tiny photo on every side of `pages` pages
    fn album(pages: usize) -> Album {
        let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([90, 120, 200, 255]));
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, image::ImageFormat::Png).unwrap();
        let png = png.into_inner();
        let sources = (0..required_photos(pages))
            .map(|i| (format!("{}.png", i), png.clone()))
            .collect();
        Album::from_sources(sources, pages).unwrap()
    }

    #[test]
    fn test_hidden_until_photos() {
        let mut s = ViewerState::new(config(2));
        assert!(!s.book_visible());
        s.handle(Action::NextPage);
        assert!(s.controller.is_idle());

        assert!(s.photos_loaded(&Ok(album(2))));
        assert!(s.book_visible());
        s.handle(Action::NextPage);
        assert_eq!(s.controller.active(), Some(Transition::FrontCover));
    }

    #[test]
    fn test_incomplete_album_stays_hidden() {
        let mut s = ViewerState::new(config(2));
        assert!(!s.photos_loaded(&Ok(album(1))));
        assert!(!s.book_visible());
        assert_eq!(
            s.status,
            PhotoStatus::Failed("Please select at least 4 photos (2 selected)".to_string())
        );

        assert!(!s.photos_loaded(&Ok(Album::default())));
        s.handle(Action::NextPage);
        assert!(s.controller.is_idle());
    }

    #[test]
    fn test_show_without_photos() {
        let s = ViewerState::new(ViewerConfig {
            show_without_photos: true,
            ..config(2)
        });
        assert!(s.book_visible());
    }

    #[test]
    fn test_failed_load_keeps_prompt_with_message() {
        let mut s = ViewerState::new(config(2));
        s.photos_loaded(&Err(PhotoError::NotEnoughPhotos { required: 4, got: 1 }));
        assert!(!s.book_visible());
        let prompt = s.prompt();
        assert_eq!(prompt.len(), 2);
        assert!(prompt[0].contains("at least 4"));
    }

    #[test]
    fn test_failed_reload_keeps_album() {
        let mut s = ViewerState::new(config(2));
        s.photos_loaded(&Ok(album(2)));
        s.photos_loaded(&Err(PhotoError::NotEnoughPhotos { required: 4, got: 1 }));
        assert!(s.book_visible());
    }

    #[test]
    fn test_new_album_closes_book() {
        let mut s = ViewerState::new(config(2));
        s.photos_loaded(&Ok(album(2)));
        s.handle(Action::NextPage);
        while s.tick(0.016).is_none() {}
        assert!(s.controller.cover_open());

        s.photos_loaded(&Ok(album(2)));
        assert!(!s.controller.cover_open());
    }

    #[test]
    fn test_flow() {
        let mut s = ViewerState::new(config(2));
        assert_eq!(s.handle(Action::OpenPhotos), Flow::OpenPhotos);
        assert_eq!(s.handle(Action::Quit), Flow::Quit);
        assert_eq!(s.handle(Action::PreviousPage), Flow::Continue);
    }

    #[test]
    fn test_status_line() {
        let mut s = ViewerState::new(config(3));
        assert_eq!(s.status_line(), "Cover");
        s.photos_loaded(&Ok(album(3)));
        s.handle(Action::NextPage);
        while s.tick(0.016).is_none() {}
        assert_eq!(s.status_line(), "Page 0/3 - 6 photos");
    }
}
