//! Overview tab: summary fields of both groups, device controls and the
//! session log.

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, toggler, Space};
use iced::{Alignment, Element, Length};
use iced_aw::NumberInput;

use bct_core::models::{BigId, Packing, BROADCAST_CODE_MAX_LEN, SUB_GROUPS_MAX, SUB_GROUPS_MIN};
use bct_core::state::{FieldChange, GroupField};

use crate::app::{App, Message};
use crate::theme::{colors, font, spacing, width};

static PACKING_OPTIONS: [Packing; 2] = Packing::ALL;

/// Build the Overview tab.
pub fn view(app: &App) -> Element<'_, Message> {
    let groups = row(BigId::ALL.map(|big| group_summary(app, big)))
        .spacing(spacing::LG);

    let content = column![
        groups,
        device_section(app),
        text("Log").size(font::HEADER),
        log_panel(app),
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn group_summary(app: &App, big: BigId) -> Element<'_, Message> {
    let group = app.state.group(big);
    let edit = move |field: GroupField| Message::Edit(FieldChange::Group { big, field });

    let preset = pick_list(
        app.state.names().presets.as_slice(),
        Some(group.preset.clone()),
        move |name| edit(GroupField::Preset(name)),
    )
    .width(Length::Fixed(width::VALUE));

    let sub_groups = NumberInput::new(
        &group.num_sub_groups,
        SUB_GROUPS_MIN..=SUB_GROUPS_MAX,
        move |n| edit(GroupField::NumSubGroups(n)),
    )
    .width(Length::Fixed(width::VALUE));

    let packing = pick_list(&PACKING_OPTIONS[..], Some(group.packing), move |p| {
        edit(GroupField::Packing(p))
    })
    .width(Length::Fixed(width::VALUE));

    let encryption = toggler(group.encryption).on_toggle(move |on| edit(GroupField::Encryption(on)));

    let code = text_input("", &group.broadcast_code)
        .on_input(move |s| edit(GroupField::BroadcastCode(s)))
        .width(Length::Fixed(width::VALUE));

    column![
        text(big.to_string()).size(font::HEADER),
        field_row("Preset:", preset.into()),
        field_row("Number of subgroups:", sub_groups.into()),
        field_row("Packing:", packing.into()),
        field_row("Encryption:", encryption.into()),
        field_row(
            "Broadcast code:",
            column![
                code,
                text(format!("max {} characters", BROADCAST_CODE_MAX_LEN))
                    .size(font::SM)
                    .color(colors::TEXT_SECONDARY),
            ]
            .into()
        ),
    ]
    .spacing(spacing::SM)
    .into()
}

fn field_row<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).width(Length::Fixed(width::LABEL)), control]
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .into()
}

fn device_section(app: &App) -> Element<'_, Message> {
    let status = match app.device_port() {
        Some(port) => text(format!("Device: {}", port)).color(colors::SUCCESS),
        None => text("No device").color(colors::WARNING),
    };

    let start = button(text("Start broadcasting")).on_press(Message::StartBroadcast);
    let header = button(text("Load header...")).on_press(Message::BrowseHeader);

    row![
        start,
        status,
        Space::new().width(Length::Fill),
        text(app.header_path())
            .size(font::SM)
            .color(colors::TEXT_SECONDARY),
        header,
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center)
    .into()
}

fn log_panel(app: &App) -> Element<'_, Message> {
    let lines = column(
        app.log_lines
            .iter()
            .map(|line| text(line.as_str()).size(font::NORMAL).into()),
    )
    .spacing(spacing::XS)
    .padding(spacing::SM);

    container(scrollable(lines).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
