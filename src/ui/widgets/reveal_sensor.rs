// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports when its content first scrolls into view.
//!
//! The sensor compares its layout bounds with the viewport it receives on each
//! event. Once the visible share of its height reaches the threshold it
//! publishes `on_reveal` a single time; the guard lives in the widget tree so
//! the message is not repeated while the section stays mounted.
//!
//! It can also report the top edge of its bounds whenever that edge moves,
//! which lets the header scroll the page to a section.

use crate::app::config::REVEAL_THRESHOLD;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

#[derive(Debug, Clone, Copy, Default)]
struct SensorState {
    revealed: bool,
    reported_top: Option<f32>,
}

/// A widget that wraps a page section and reports its visibility.
pub struct RevealSensor<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_reveal: Option<Message>,
    on_measure: Option<Box<dyn Fn(f32) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> RevealSensor<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_reveal: None,
            on_measure: None,
        }
    }

    /// Message published the first time enough of the content is visible.
    #[must_use]
    pub fn on_reveal(mut self, message: Message) -> Self {
        self.on_reveal = Some(message);
        self
    }

    /// Called with the top edge of the content whenever it changes.
    #[must_use]
    pub fn on_measure(mut self, f: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_measure = Some(Box::new(f));
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for RevealSensor<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<SensorState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(SensorState::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<SensorState>();

        if let Some(on_measure) = &self.on_measure {
            if state.reported_top != Some(bounds.y) {
                state.reported_top = Some(bounds.y);
                shell.publish(on_measure(bounds.y));
            }
        }

        if !state.revealed && visible_fraction(bounds, *viewport) >= REVEAL_THRESHOLD {
            state.revealed = true;
            if let Some(message) = &self.on_reveal {
                shell.publish(message.clone());
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<RevealSensor<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(sensor: RevealSensor<'a, Message, Theme, Renderer>) -> Self {
        Self::new(sensor)
    }
}

/// Helper function to wrap content in a [`RevealSensor`].
pub fn reveal_sensor<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> RevealSensor<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    RevealSensor::new(content)
}

/// Share of `bounds`' height that lies inside `viewport`.
///
/// Zero-height bounds are never considered visible.
pub fn visible_fraction(bounds: Rectangle, viewport: Rectangle) -> f32 {
    if bounds.height <= 0.0 {
        return 0.0;
    }
    let top = bounds.y.max(viewport.y);
    let bottom = (bounds.y + bounds.height).min(viewport.y + viewport.height);
    let horizontal_overlap =
        bounds.x < viewport.x + viewport.width && viewport.x < bounds.x + bounds.width;

    if bottom <= top || !horizontal_overlap {
        return 0.0;
    }
    ((bottom - top) / bounds.height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn rect(y: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 800.0,
            height,
        }
    }

    #[test]
    fn section_below_viewport_is_hidden() {
        assert_abs_diff_eq!(visible_fraction(rect(900.0, 500.0), rect(0.0, 800.0)), 0.0);
    }

    #[test]
    fn partially_scrolled_in_section_reports_share() {
        // 100 of 500 px visible
        let fraction = visible_fraction(rect(700.0, 500.0), rect(0.0, 800.0));
        assert_abs_diff_eq!(fraction, 0.2, epsilon = 1e-6);
        assert!(fraction >= REVEAL_THRESHOLD);
    }

    #[test]
    fn fully_visible_section_reports_one() {
        assert_abs_diff_eq!(visible_fraction(rect(100.0, 300.0), rect(0.0, 800.0)), 1.0);
    }

    #[test]
    fn scrolled_past_section_is_hidden() {
        assert_abs_diff_eq!(visible_fraction(rect(0.0, 400.0), rect(1200.0, 800.0)), 0.0);
    }

    #[test]
    fn zero_height_section_is_never_visible() {
        assert_abs_diff_eq!(visible_fraction(rect(100.0, 0.0), rect(0.0, 800.0)), 0.0);
    }
}
