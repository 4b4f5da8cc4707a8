//! Group tab: preset parameters and one column per subgroup.
//!
//! The content is keyed by the group's rebuild generation, so a preset or
//! subgroup count change drops all widget state of the previous build.

use iced::widget::{column, container, keyed_column, pick_list, row, scrollable, text, text_input};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::{Alignment, Element, Length};
use iced_aw::NumberInput;

use bct_core::derivation::PresetView;
use bct_core::models::{
    BigId, Framing, SubGroup, BISES_MAX, BISES_MIN, LANGUAGE_MAX_LEN, RTN_MAX, RTN_MIN,
    SDU_INTERVAL_OPTIONS_US,
};
use bct_core::state::{CustomField, FieldChange, GroupField, SubGroupField};

use crate::app::{App, Message};
use crate::theme::{colors, font, spacing, width};

static FRAMING_OPTIONS: [Framing; 2] = Framing::ALL;
static SDU_INTERVALS: [u32; 2] = SDU_INTERVAL_OPTIONS_US;

/// Build the tab for one group.
pub fn view(app: &App, big: BigId) -> Element<'_, Message> {
    let content = column![
        preset_row(app, big),
        preset_params(app, big),
        text("Subgroups").size(font::HEADER),
        sub_groups(app, big),
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG);

    let keyed = keyed_column([(app.state.rebuild_generation(big), Element::from(content))]);

    container(scrollable(keyed).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn preset_row(app: &App, big: BigId) -> Element<'_, Message> {
    let group = app.state.group(big);
    let preset = pick_list(
        app.state.names().presets.as_slice(),
        Some(group.preset.clone()),
        move |name| {
            Message::Edit(FieldChange::Group {
                big,
                field: GroupField::Preset(name),
            })
        },
    )
    .width(Length::Fixed(width::VALUE));

    label_row("Preset name:", preset.into())
}

fn preset_params(app: &App, big: BigId) -> Element<'_, Message> {
    let view = app.state.preset_view(big);
    // Debug formatting keeps the trailing ".0" on whole numbers
    let bitrate: Element<'_, Message> = text(format!("{:?}", view.bitrate_kbps)).into();

    let rows = if view.custom {
        custom_rows(app, big, bitrate)
    } else {
        catalog_rows(&view, bitrate)
    };

    column(rows).spacing(spacing::XS).into()
}

fn catalog_rows<'a>(view: &PresetView, bitrate: Element<'a, Message>) -> Vec<Element<'a, Message>> {
    let p = &view.params;
    vec![
        label_row("SDU interval (us):", text(p.sdu_interval_us.to_string()).into()),
        label_row("Framing:", text(p.framing.to_string()).into()),
        label_row("Octets per SDU:", text(p.octets_per_sdu.to_string()).into()),
        label_row("Bitrate (kbps):", bitrate),
        label_row("Retransmits:", text(p.rtn.to_string()).into()),
        label_row(
            "Max Transport Latency (ms):",
            text(p.max_transport_latency_ms.to_string()).into(),
        ),
        label_row(
            "Presentation Delay (us):",
            text(p.presentation_delay_us.to_string()).into(),
        ),
    ]
}

fn custom_rows<'a>(app: &'a App, big: BigId, bitrate: Element<'a, Message>) -> Vec<Element<'a, Message>> {
    let p = &app.state.group(big).custom;
    let edit = move |field: CustomField| Message::Edit(FieldChange::Custom { big, field });
    let fixed = Length::Fixed(width::VALUE);

    vec![
        label_row(
            "SDU interval (us):",
            pick_list(&SDU_INTERVALS[..], Some(p.sdu_interval_us), move |us| {
                edit(CustomField::SduInterval(us))
            })
            .width(fixed)
            .into(),
        ),
        label_row(
            "Framing:",
            pick_list(&FRAMING_OPTIONS[..], Some(p.framing), move |f| {
                edit(CustomField::Framing(f))
            })
            .width(fixed)
            .into(),
        ),
        label_row(
            "Octets per SDU:",
            NumberInput::new(&p.octets_per_sdu, 0..=u16::MAX, move |n| {
                edit(CustomField::OctetsPerSdu(n))
            })
            .width(fixed)
            .into(),
        ),
        label_row("Bitrate (kbps):", bitrate),
        label_row(
            "Retransmits:",
            NumberInput::new(&p.rtn, RTN_MIN..=RTN_MAX, move |n| edit(CustomField::Rtn(n)))
                .width(fixed)
                .into(),
        ),
        label_row(
            "Max Transport Latency (ms):",
            NumberInput::new(&p.max_transport_latency_ms, 0..=u16::MAX, move |n| {
                edit(CustomField::MaxTransportLatency(n))
            })
            .width(fixed)
            .into(),
        ),
        label_row(
            "Presentation Delay (us):",
            NumberInput::new(&p.presentation_delay_us, 0..=u32::MAX, move |n| {
                edit(CustomField::PresentationDelay(n))
            })
            .width(fixed)
            .into(),
        ),
    ]
}

fn sub_groups(app: &App, big: BigId) -> Element<'_, Message> {
    let group = app.state.group(big);
    if group.sub_groups.is_empty() {
        return text("No subgroups")
            .size(font::SM)
            .color(colors::TEXT_SECONDARY)
            .into();
    }

    scrollable(row(sub_group_columns(app, big)).spacing(spacing::LG))
        .direction(Direction::Horizontal(Scrollbar::default()))
        .width(Length::Fill)
        .into()
}

fn sub_group_columns(app: &App, big: BigId) -> Vec<Element<'_, Message>> {
    app.state
        .group(big)
        .sub_groups
        .iter()
        .enumerate()
        .map(|(index, sub)| sub_group_column(app, big, index, sub))
        .collect()
}

/// Column headers count from 1.
fn sub_group_title(index: usize) -> String {
    format!("Subgroup {}", index + 1)
}

fn sub_group_column<'a>(
    app: &'a App,
    big: BigId,
    index: usize,
    sub: &'a SubGroup,
) -> Element<'a, Message> {
    let edit = move |field: SubGroupField| Message::Edit(FieldChange::SubGroup { big, index, field });
    let fixed = Length::Fixed(width::SUB_GROUP);

    let context = pick_list(
        app.state.names().contexts.as_slice(),
        Some(sub.context.clone()),
        move |c| edit(SubGroupField::Context(c)),
    )
    .width(fixed);

    let bises = NumberInput::new(&sub.num_bises, BISES_MIN..=BISES_MAX, move |n| {
        edit(SubGroupField::NumBises(n))
    })
    .width(fixed);

    let language = text_input("", &sub.language)
        .on_input(move |s| edit(SubGroupField::Language(s)))
        .width(fixed);

    column![
        text(sub_group_title(index)).size(font::NORMAL),
        text("Context:").size(font::SM),
        context,
        text("Number of BISes:").size(font::SM),
        bises,
        text(format!("Language (max {}):", LANGUAGE_MAX_LEN)).size(font::SM),
        language,
    ]
    .spacing(spacing::XS)
    .width(fixed)
    .into()
}

fn label_row<'a>(label: &'a str, value: Element<'a, Message>) -> Element<'a, Message> {
    row![
        text(label).width(Length::Fixed(width::LABEL)),
        container(value).width(Length::Fixed(width::VALUE)),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    use bct_core::models::{CUSTOM, NOT_SET};

    fn edit(app: &mut App, big: BigId, field: GroupField) {
        let _ = app.update(Message::Edit(FieldChange::Group { big, field }));
    }

    #[test]
    fn not_set_group_builds_with_no_subgroups() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path(), None);
        assert_eq!(app.state.group(BigId::Big0).preset, NOT_SET);

        let _ = view(&app, BigId::Big0);
        assert!(sub_group_columns(&app, BigId::Big0).is_empty());
        assert_eq!(preset_params_len(&app, BigId::Big0), 7);
    }

    #[test]
    fn catalog_preset_shows_fixed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), None);
        edit(&mut app, BigId::Big1, GroupField::Preset("16_2_1".to_string()));

        assert!(!app.state.preset_view(BigId::Big1).custom);
        let _ = view(&app, BigId::Big1);
        assert_eq!(preset_params_len(&app, BigId::Big1), 7);
    }

    #[test]
    fn custom_preset_gets_one_column_per_subgroup() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), None);
        edit(&mut app, BigId::Big0, GroupField::Preset(CUSTOM.to_string()));
        edit(&mut app, BigId::Big0, GroupField::NumSubGroups(3));

        assert!(app.state.preset_view(BigId::Big0).custom);
        let _ = view(&app, BigId::Big0);
        assert_eq!(sub_group_columns(&app, BigId::Big0).len(), 3);
        assert_eq!(preset_params_len(&app, BigId::Big0), 7);
        // The other group is untouched
        assert!(sub_group_columns(&app, BigId::Big1).is_empty());
    }

    #[test]
    fn rebuild_generation_moves_with_preset_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), None);
        let before = app.state.rebuild_generation(BigId::Big0);

        edit(&mut app, BigId::Big0, GroupField::Preset("48_4_1".to_string()));
        assert_ne!(app.state.rebuild_generation(BigId::Big0), before);

        let settled = app.state.rebuild_generation(BigId::Big0);
        edit(&mut app, BigId::Big0, GroupField::Encryption(true));
        assert_eq!(app.state.rebuild_generation(BigId::Big0), settled);
        let _ = view(&app, BigId::Big0);
    }

    #[test]
    fn subgroup_titles_count_from_one() {
        assert_eq!(sub_group_title(0), "Subgroup 1");
        assert_eq!(sub_group_title(2), "Subgroup 3");
    }

    fn preset_params_len(app: &App, big: BigId) -> usize {
        let view = app.state.preset_view(big);
        let bitrate: Element<'_, Message> = text("").into();
        if view.custom {
            custom_rows(app, big, bitrate).len()
        } else {
            catalog_rows(&view, bitrate).len()
        }
    }
}
