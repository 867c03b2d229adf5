use ratatui::layout::Rect;
use strum::{Display, EnumIter};

use crate::testutils::*;
use crate::widgets::{
    button::Button,
    form::{Form, FormEvent, FormItemIndex, FormWidget},
    input_box::InputBox,
};

#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq)]
enum Item {
    Symbol,
    Start,
    Go,
}

impl FormItemIndex for Item {
    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<Item> for FormWidget {
    type Error = crate::Error;

    fn try_from(value: Item) -> crate::Result<Self> {
        Ok(match value {
            Item::Symbol => FormWidget::InputBox {
                widget: InputBox::new("Symbol").with_width(14),
            },
            Item::Start => FormWidget::InputBox {
                widget: InputBox::new("Start").with_width(14),
            },
            Item::Go => FormWidget::Button {
                widget: Button::new("Go"),
            },
        })
    }
}

fn form() -> Form<Item, crate::Error> {
    Form::init(|_| Ok(())).expect("form init")
}

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 50,
    height: 3,
};

// ============================================================================
// Layout and rendering tests
// ============================================================================

#[test]
fn layout_is_a_single_row() {
    let form = form();

    assert_eq!(form.height(), 3);
    assert_eq!(
        form.layout(AREA),
        vec![
            Rect::new(0, 0, 14, 3),
            Rect::new(15, 0, 14, 3),
            Rect::new(30, 0, 6, 3),
        ]
    );
}

#[test]
fn render_row() {
    let mut term = TestTerminal::new(50, 3);
    let form = Form::<Item, crate::Error>::init(|form| {
        form.set_text(Item::Symbol, "AAPL".to_string())
    })
    .expect("form init");

    form.render(term.area, &mut term.buffer, &TestTheme::boxed());

    let expected = "\
┌Symbol──────┐ ┌Start───────┐ ┌────┐
│ AAPL       │ │            │ │ Go │
└────────────┘ └────────────┘ └────┘";
    assert_eq!(term.render_to_string(), expected);
    assert_eq!(term.find_cursor(), Some((6, 1, ' ')));
}

#[test]
fn hidden_item_is_skipped_in_layout() {
    let mut form = form();
    form.hide_item(Item::Start);

    assert_eq!(form.visible_count(), 2);
    assert_eq!(
        form.layout(AREA),
        vec![Rect::new(0, 0, 14, 3), Rect::default(), Rect::new(15, 0, 6, 3)]
    );
}

// ============================================================================
// Focus tests
// ============================================================================

#[test]
fn tab_and_back_tab_cycle_focus() {
    let mut form = form();
    assert!(form.is_focused(Item::Symbol));

    form.handle_event(Some(&tab()), AREA).unwrap();
    assert!(form.is_focused(Item::Start));

    form.handle_event(Some(&tab()), AREA).unwrap();
    assert!(form.is_focused(Item::Go));
    assert!(form.is_button_focused());

    form.handle_event(Some(&tab()), AREA).unwrap();
    assert!(form.is_focused(Item::Symbol));

    form.handle_event(Some(&back_tab()), AREA).unwrap();
    assert_eq!(form.current_label_enum().unwrap(), Item::Go);
}

#[test]
fn tab_skips_hidden_item() {
    let mut form = form();
    form.hide_item(Item::Start);

    form.handle_event(Some(&tab()), AREA).unwrap();

    assert!(form.is_focused(Item::Go));
}

#[test]
fn enter_on_input_advances_focus() {
    let mut form = form();

    let event = form.handle_event(Some(&enter()), AREA).unwrap();

    assert_eq!(event, None);
    assert!(form.is_focused(Item::Start));
}

#[test]
fn keys_ignored_without_form_focus() {
    let mut form = form();
    form.set_form_focus(false);

    form.handle_event(Some(&tab()), AREA).unwrap();
    form.handle_event(Some(&key('A')), AREA).unwrap();

    assert!(form.is_focused(Item::Symbol));
    assert_eq!(form.get_text(Item::Symbol).unwrap(), "");
}

// ============================================================================
// Event tests
// ============================================================================

#[test]
fn typing_reports_value_changed() {
    let mut form = form();

    let event = form.handle_event(Some(&key('M')), AREA).unwrap();

    assert_eq!(event, Some(FormEvent::ValueChanged(Item::Symbol)));
    assert_eq!(form.get_text(Item::Symbol).unwrap(), "M");
}

#[test]
fn enter_on_button_presses_it() {
    let mut form = form();
    form.focus(Item::Go);

    let event = form.handle_event(Some(&enter()), AREA).unwrap();

    assert_eq!(event, Some(FormEvent::ButtonPressed(Item::Go)));
}

#[test]
fn mouse_click_focuses_item() {
    let mut form = form();
    form.set_text(Item::Start, "2023".to_string()).unwrap();

    // text of the second box starts at column 17
    let event = form.handle_event(Some(&mouse_click(19, 1)), AREA).unwrap();

    assert_eq!(event, None);
    assert!(form.is_focused(Item::Start));

    form.handle_event(Some(&key('X')), AREA).unwrap();
    assert_eq!(form.get_text(Item::Start).unwrap(), "20X23");
}

#[test]
fn mouse_click_presses_button_without_form_focus() {
    let mut form = form();
    form.set_form_focus(false);

    let event = form.handle_event(Some(&mouse_click(32, 1)), AREA).unwrap();

    assert_eq!(event, Some(FormEvent::ButtonPressed(Item::Go)));
}

#[test]
fn mouse_click_outside_items() {
    let mut form = form();

    let event = form.handle_event(Some(&mouse_click(45, 1)), AREA).unwrap();

    assert_eq!(event, None);
    assert!(form.is_focused(Item::Symbol));
}

// ============================================================================
// Value access tests
// ============================================================================

#[test]
fn button_has_no_text() {
    let form = form();

    let err = form.get_text(Item::Go).unwrap_err();

    assert!(matches!(
        err,
        crate::Error::FormItemNotInput { ref label } if label == "Go"
    ));
}

#[test]
fn invalid_flag_round_trips() {
    let mut form = form();

    form.set_invalid(Item::Start, true).unwrap();

    assert!(form.is_invalid(Item::Start).unwrap());
    assert!(!form.is_invalid(Item::Symbol).unwrap());
    assert!(form.set_invalid(Item::Go, true).is_err());
}
