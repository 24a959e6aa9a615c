//! Built-in sample dashboards, one per slot layout.

use anyhow::Result;
use dashboard_widgets::colors;
use dashboard_widgets::config::{
    ChartOptions,
    EntityOptions,
    GaugeOptions,
    GaugeStyle,
    ProgressOptions,
    StatusOptions,
    TextOptions,
    WidgetConfig,
};
use dashboard_widgets::slots::{Grid, Hero, Split, SplitDirection, ThreeColumn};
use dashboard_widgets::styles::FontSize;
use dashboard_widgets::{Dashboard, SlotLayout, Theme, Widget, thresholds};

use crate::state::{motion_history, wave_history};

/// A named dashboard ready to render.
pub struct Sample {
    pub name: &'static str,
    pub dashboard: Dashboard,
}

// =============================================================================
// Widget Shorthands
// =============================================================================

fn gauge(
    slot: usize,
    style: GaugeStyle,
    entity_id: &str,
) -> WidgetConfig {
    WidgetConfig::new(slot, GaugeOptions::styled(style)).entity(entity_id)
}

fn icon_bar(
    slot: usize,
    entity_id: &str,
    icon: &str,
) -> WidgetConfig {
    let options = GaugeOptions {
        icon: Some(icon.to_owned()),
        ..GaugeOptions::default()
    };
    WidgetConfig::new(slot, options).entity(entity_id)
}

fn entity(
    slot: usize,
    entity_id: &str,
    icon: Option<&str>,
) -> WidgetConfig {
    let options = EntityOptions {
        icon: icon.map(str::to_owned),
        ..EntityOptions::default()
    };
    WidgetConfig::new(slot, options).entity(entity_id)
}

fn room(
    slot: usize,
    entity_id: &str,
) -> WidgetConfig {
    let options = EntityOptions {
        icon: Some("thermometer".into()),
        show_panel: true,
        color_thresholds: thresholds::room_temperature(),
        ..EntityOptions::default()
    };
    WidgetConfig::new(slot, options).entity(entity_id)
}

fn status(
    slot: usize,
    entity_id: &str,
    icon: &str,
) -> WidgetConfig {
    let options = StatusOptions {
        icon: Some(icon.to_owned()),
        ..StatusOptions::default()
    };
    WidgetConfig::new(slot, options).entity(entity_id)
}

fn chart(
    slot: usize,
    entity_id: &str,
    fill: bool,
) -> WidgetConfig {
    let options = ChartOptions {
        fill,
        color_gradient: !fill,
        ..ChartOptions::default()
    };
    WidgetConfig::new(slot, options).entity(entity_id)
}

fn battery(slot: usize) -> WidgetConfig {
    let options = GaugeOptions {
        style: GaugeStyle::Ring,
        color_thresholds: thresholds::battery(),
        ..GaugeOptions::default()
    };
    WidgetConfig::new(slot, options).entity("sensor.phone_battery")
}

fn steps(slot: usize) -> WidgetConfig {
    let options = ProgressOptions {
        target: 10_000.0,
        icon: Some("walk".into()),
        ..ProgressOptions::default()
    };
    WidgetConfig::new(slot, options).entity("sensor.steps")
}

fn headline(
    slot: usize,
    text: &str,
) -> WidgetConfig {
    let options = TextOptions {
        text: text.to_owned(),
        size: FontSize::XLarge,
        ..TextOptions::default()
    };
    WidgetConfig::new(slot, options).label("Home").color(colors::GOLD)
}

fn assemble(
    name: &'static str,
    layout: impl SlotLayout + 'static,
    theme: Theme,
    widgets: Vec<Widget>,
) -> Result<Sample> {
    let mut dashboard = Dashboard::new(Box::new(layout), theme);
    for widget in widgets {
        dashboard.set_widget(widget.slot(), widget)?;
    }
    Ok(Sample { name, dashboard })
}

// =============================================================================
// Samples
// =============================================================================

/// Every built-in sample.
pub fn all() -> Result<Vec<Sample>> {
    Ok(vec![
        assemble("grid_2x2", Grid::grid_2x2(), Theme::classic(), vec![
            gauge(0, GaugeStyle::Ring, "sensor.cpu").into(),
            gauge(1, GaugeStyle::Arc, "sensor.memory").into(),
            icon_bar(2, "sensor.disk", "battery").into(),
            entity(3, "sensor.living_temp", Some("thermometer")).into(),
        ])?,
        assemble("grid_2x3", Grid::grid_2x3(), Theme::neon(), vec![
            gauge(0, GaugeStyle::Ring, "sensor.cpu").into(),
            gauge(1, GaugeStyle::Ring, "sensor.memory").into(),
            battery(2).into(),
            entity(3, "sensor.humidity", Some("water")).into(),
            entity(4, "sensor.power", Some("flash")).into(),
            entity(5, "sensor.offline", None).into(),
        ])?,
        assemble("grid_3x2", Grid::grid_3x2(), Theme::classic(), vec![
            status(0, "lock.front_door", "lock").into(),
            status(1, "light.kitchen", "lightbulb").into(),
            icon_bar(2, "sensor.cpu", "fire").into(),
            icon_bar(3, "sensor.memory", "heart").into(),
            steps(4).into(),
            status(5, "binary_sensor.hall_motion", "walk").into(),
        ])?,
        assemble("grid_3x3", Grid::grid_3x3(), Theme::minimal(), vec![
            gauge(0, GaugeStyle::Ring, "sensor.cpu").into(),
            gauge(1, GaugeStyle::Arc, "sensor.memory").into(),
            gauge(2, GaugeStyle::Ring, "sensor.disk").into(),
            entity(3, "sensor.living_temp", None).into(),
            entity(4, "sensor.office_temp", None).into(),
            entity(5, "sensor.outside_temp", None).into(),
            battery(6).into(),
            entity(7, "sensor.humidity", Some("water")).into(),
            WidgetConfig::new(8, TextOptions::fixed("Hi")).entity("sensor.weather").into(),
        ])?,
        assemble("hero", Hero::default(), Theme::classic(), vec![
            Widget::new(chart(0, "sensor.living_temp", true)).with_history(wave_history(21.0, 1.5, 0.0)),
            room(1, "sensor.living_temp").into(),
            room(2, "sensor.office_temp").into(),
            room(3, "sensor.outside_temp").into(),
        ])?,
        assemble("split_columns", Split::new(SplitDirection::Columns, 0.5)?, Theme::light(), vec![
            gauge(0, GaugeStyle::Arc, "sensor.cpu").into(),
            Widget::new(chart(1, "binary_sensor.hall_motion", false)).with_history(motion_history()),
        ])?,
        assemble("split_rows", Split::new(SplitDirection::Rows, 0.6)?, Theme::classic(), vec![
            Widget::new(chart(0, "sensor.power", false)).with_history(wave_history(1600.0, 400.0, 1.2)),
            steps(1).into(),
        ])?,
        assemble("three_column", ThreeColumn::default(), Theme::neon(), vec![
            room(0, "sensor.living_temp").into(),
            headline(1, "21:45").into(),
            WidgetConfig::new(2, GaugeOptions {
                style: GaugeStyle::Arc,
                min: 10.0,
                max: 30.0,
                attribute: Some("current_temperature".into()),
                ..GaugeOptions::default()
            })
            .entity("climate.bedroom")
            .into(),
        ])?,
    ])
}
