// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison widget.
//!
//! Stacks two layers of equal size and clips the "before" layer to the left
//! of the divider. A chrome layer (corner labels) is drawn over both and a
//! handle is centered on the divider line.
//!
//! The widget does not own the divider position. It reports raw pointer
//! input through `on_input` and draws whatever position the caller passes
//! back, which keeps [`CompareState`](crate::ui::state::CompareState) the
//! single source of truth.
//!
//! A mouse drag ends when the pointer leaves the frame. A finger that went
//! down on the frame keeps reporting until it lifts, even past the edges.

use crate::app::config::DIVIDER_WIDTH;
use crate::ui::design_tokens::palette;
use crate::ui::state::{DividerPosition, PointerSample, SliderInput};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Point, Rectangle, Size};

const AFTER: usize = 0;
const BEFORE: usize = 1;
const CHROME: usize = 2;
const HANDLE: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
struct SliderState {
    hovered: bool,
    /// Finger that started on the slider. Its moves keep steering the
    /// divider after it slides past an edge.
    finger: Option<touch::Finger>,
}

/// Two stacked layers split by a draggable vertical divider.
pub struct CompareSlider<'a, Message, Theme, Renderer> {
    layers: [Element<'a, Message, Theme, Renderer>; 4],
    position: DividerPosition,
    on_input: Box<dyn Fn(SliderInput) -> Message + 'a>,
    width: Length,
    height: Length,
}

impl<'a, Message, Theme, Renderer> CompareSlider<'a, Message, Theme, Renderer> {
    /// Creates a slider from the full-size `before`, `after` and `chrome`
    /// layers plus the `handle` drawn on the divider.
    pub fn new(
        before: impl Into<Element<'a, Message, Theme, Renderer>>,
        after: impl Into<Element<'a, Message, Theme, Renderer>>,
        chrome: impl Into<Element<'a, Message, Theme, Renderer>>,
        handle: impl Into<Element<'a, Message, Theme, Renderer>>,
        position: DividerPosition,
        on_input: impl Fn(SliderInput) -> Message + 'a,
    ) -> Self {
        Self {
            layers: [after.into(), before.into(), chrome.into(), handle.into()],
            position,
            on_input: Box::new(on_input),
            width: Length::Fill,
            height: Length::Shrink,
        }
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for CompareSlider<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<SliderState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(SliderState::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(self.width, self.height, Size::ZERO);
        let full = layout::Limits::new(size, size);

        let mut nodes: Vec<layout::Node> = self
            .layers
            .iter_mut()
            .zip(tree.children.iter_mut())
            .enumerate()
            .map(|(index, (layer, child))| {
                let limits = if index == HANDLE {
                    layout::Limits::new(Size::ZERO, size)
                } else {
                    full
                };
                layer.as_widget_mut().layout(child, renderer, &limits)
            })
            .collect();

        let handle = nodes[HANDLE].size();
        nodes[HANDLE] = nodes[HANDLE]
            .clone()
            .move_to(handle_origin(size, handle, self.position));

        layout::Node::with_children(size, nodes)
    }

    fn children(&self) -> Vec<widget::Tree> {
        self.layers.iter().map(widget::Tree::new).collect()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&self.layers);
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
        let bounds = layout.bounds();
        let Some(clip) = bounds.intersection(viewport) else {
            return;
        };
        let children: Vec<Layout<'_>> = layout.children().collect();
        let draw_layer = |index: usize, renderer: &mut Renderer, viewport: &Rectangle| {
            self.layers[index].as_widget().draw(
                &tree.children[index],
                renderer,
                theme,
                style,
                children[index],
                cursor,
                viewport,
            );
        };

        renderer.with_layer(clip, |renderer| {
            draw_layer(AFTER, renderer, &clip);

            let before_clip = Rectangle {
                width: bounds.width * self.position.as_fraction(),
                ..bounds
            };
            if let Some(before_clip) = before_clip.intersection(&clip) {
                renderer.with_layer(before_clip, |renderer| {
                    draw_layer(BEFORE, renderer, &before_clip);
                });
            }

            renderer.fill_quad(
                renderer::Quad {
                    bounds: divider_bounds(bounds, self.position),
                    ..renderer::Quad::default()
                },
                palette::WHITE,
            );

            draw_layer(CHROME, renderer, &clip);
            draw_layer(HANDLE, renderer, &clip);
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<SliderState>();
        let over = cursor.position_over(bounds);

        let input = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if over.is_some() => {
                shell.capture_event();
                Some(SliderInput::PointerDown)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if over.is_some() => {
                Some(SliderInput::PointerUp)
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => match over {
                Some(position) => {
                    state.hovered = true;
                    Some(SliderInput::PointerMoved(sample_at(position, bounds)))
                }
                None if state.hovered => {
                    state.hovered = false;
                    Some(SliderInput::PointerLeft)
                }
                None => None,
            },
            Event::Mouse(mouse::Event::CursorLeft) if state.hovered => {
                state.hovered = false;
                Some(SliderInput::PointerLeft)
            }
            Event::Touch(touch::Event::FingerPressed { id, position })
                if bounds.contains(*position) =>
            {
                state.finger = Some(*id);
                shell.capture_event();
                None
            }
            Event::Touch(touch::Event::FingerMoved { id, position })
                if state.finger == Some(*id) || bounds.contains(*position) =>
            {
                state.finger = Some(*id);
                shell.capture_event();
                Some(SliderInput::TouchMoved(sample_at(*position, bounds)))
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) if state.finger == Some(*id) => {
                state.finger = None;
                None
            }
            _ => None,
        };

        if let Some(input) = input {
            shell.publish((self.on_input)(input));
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Theme, Renderer> From<CompareSlider<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slider: CompareSlider<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slider)
    }
}

/// Turns a cursor position inside `bounds` into a divider sample.
fn sample_at(position: Point, bounds: Rectangle) -> PointerSample {
    PointerSample::new(position.x, bounds.x, bounds.width)
}

/// Thin vertical line centered on the divider.
fn divider_bounds(bounds: Rectangle, position: DividerPosition) -> Rectangle {
    let x = bounds.x + bounds.width * position.as_fraction();
    Rectangle {
        x: x - DIVIDER_WIDTH / 2.0,
        y: bounds.y,
        width: DIVIDER_WIDTH,
        height: bounds.height,
    }
}

/// Top-left corner of the handle, relative to the widget, centered on the divider.
fn handle_origin(size: Size, handle: Size, position: DividerPosition) -> Point {
    Point::new(
        size.width * position.as_fraction() - handle.width / 2.0,
        (size.height - handle.height) / 2.0,
    )
}
