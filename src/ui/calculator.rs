//! The calculator window: display panel above a clickable keypad.

use crate::calculator::{
    Button, CalculatorState, DisplayOptions, KEYPAD_COLUMNS, KEYPAD_LAYOUT, KeypadKey,
    render_display,
};
use crate::clipboard::copy_to_clipboard;
use crate::ui::theme::theme;
use gpui::{
    ClickEvent, Context, Div, ElementId, FontWeight, SharedString, Stateful, Window, div,
    prelude::*,
};
use gpui_component::{h_flex, v_flex};

/// View that owns the calculator state and renders it.
pub struct CalculatorView {
    state: CalculatorState,
    display_options: DisplayOptions,
}

impl CalculatorView {
    pub fn new(display_options: DisplayOptions) -> Self {
        Self {
            state: CalculatorState::new(),
            display_options,
        }
    }

    /// Text shown in the display panel.
    pub fn rendered_display(&self) -> String {
        render_display(self.state.display(), &self.display_options)
    }

    fn press(&mut self, button: Button, cx: &mut Context<Self>) {
        self.state.press(button);
        tracing::debug!(
            button = %button,
            display = %self.state.display(),
            "Button pressed"
        );
        cx.notify();
    }

    fn copy_display(&self) {
        let text = self.rendered_display();
        match copy_to_clipboard(&text) {
            Ok(()) => tracing::info!(%text, "Copied display to clipboard"),
            Err(err) => tracing::warn!(error = %err, "Could not copy display"),
        }
    }

    fn render_display_panel(&self, cx: &mut Context<Self>) -> Stateful<Div> {
        let t = theme();

        div()
            .id("calculator-display")
            .w_full()
            .p(t.display_padding)
            .bg(t.display_background)
            .border_1()
            .border_color(t.panel_border)
            .rounded(t.key_radius)
            .overflow_hidden()
            .cursor_pointer()
            .on_click(cx.listener(|this, _: &ClickEvent, _window, _cx| this.copy_display()))
            .child(
                h_flex()
                    .w_full()
                    .justify_end()
                    .font_family("monospace")
                    .text_size(t.display_text_size)
                    .font_weight(FontWeight::LIGHT)
                    .text_color(t.display_color)
                    .whitespace_nowrap()
                    .child(SharedString::from(self.rendered_display())),
            )
    }

    fn render_keypad(&self, cx: &mut Context<Self>) -> Div {
        let t = theme();
        let mut keypad = v_flex().w_full().gap(t.key_gap);

        for (row, keys) in KEYPAD_LAYOUT.iter().enumerate() {
            let mut row_element = h_flex().w_full().gap(t.key_gap);
            for (col, key) in keys.iter().enumerate() {
                row_element = row_element.child(render_key(*key, key_index(row, col), cx));
            }
            keypad = keypad.child(row_element);
        }

        keypad
    }
}

/// Element index of the key at `row`, `col` of the keypad grid.
fn key_index(row: usize, col: usize) -> usize {
    row * KEYPAD_COLUMNS + col
}

/// Render one keypad key.
///
/// A key spanning `n` columns grows `n` times as much as a single key and
/// absorbs the `n - 1` gaps it covers, so it lines up with the rows above.
fn render_key(key: KeypadKey, index: usize, cx: &Context<CalculatorView>) -> Stateful<Div> {
    let t = theme();
    let colors = t.key_colors(key.button.kind());
    let button = key.button;
    let spanned_gaps = f32::from(key.columns.saturating_sub(1));

    let mut element = div().id(ElementId::NamedInteger("calc-key".into(), index as u64));
    element.style().flex_grow = Some(f32::from(key.columns));

    element
        .flex_shrink_0()
        .flex_basis(t.key_gap * spanned_gaps)
        .h(t.key_height)
        .flex()
        .items_center()
        .justify_center()
        .rounded(t.key_radius)
        .bg(colors.background)
        .hover(move |style| style.bg(colors.hover))
        .cursor_pointer()
        .text_size(t.key_text_size)
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(t.key_text_color)
        .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| this.press(button, cx)))
        .child(SharedString::from(button.label()))
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .p(t.window_padding)
            .bg(t.window_background)
            .child(
                div()
                    .mb_8()
                    .text_size(t.title_size)
                    .font_weight(FontWeight::BOLD)
                    .text_color(t.title_color)
                    .child(SharedString::from("Calculator")),
            )
            .child(
                v_flex()
                    .w_full()
                    .gap_6()
                    .p(t.panel_padding)
                    .bg(t.panel_background)
                    .border_1()
                    .border_color(t.panel_border)
                    .rounded(t.panel_radius)
                    .child(self.render_display_panel(cx))
                    .child(self.render_keypad(cx)),
            )
    }
}
