use std::path::PathBuf;

use anyhow::Context;
use clockface_core::*;
use clockface_picker::*;
use serde::Deserialize;

const DEFAULT_SCRIPT: &str = include_str!("../scripts/tap_three_then_minutes.json");

#[derive(Deserialize)]
struct Script {
    #[serde(default)]
    config: PickerConfig,
    steps: Vec<Step>,
}

#[derive(Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    Touch {
        phase: PointerPhase,
        x: f32,
        y: f32,
        #[serde(default)]
        pointer: u64,
    },
    Show { item: PickerType },
    SetHour { hour: u8 },
    SetMinute { minute: u8 },
    SetAmPm { am_pm: AmPm },
    Adjust { step: i32 },
    Enable { enabled: bool },
}

fn load_script() -> anyhow::Result<Script> {
    let text = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => DEFAULT_SCRIPT.to_string(),
    };
    serde_json::from_str(&text).context("parsing touch script")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let script = load_script()?;

    let mut picker = RadialPicker::new(script.config)
        .context("building picker")?
        .on_value_selected(|v| {
            log::info!(
                "selected {:?} = {} (auto_advance={})",
                v.picker_type,
                v.value,
                v.auto_advance
            )
        })
        .on_haptic_feedback(|| log::info!("tick"));

    log::info!(
        "starting at {:02}:{:02}",
        picker.current_hour(),
        picker.current_minute()
    );

    for step in script.steps {
        let result = match step {
            Step::Touch {
                phase,
                x,
                y,
                pointer,
            } => picker.handle_pointer(
                &PointerEvent::touch(phase, Vec2::new(x, y)).with_id(PointerId(pointer)),
            ),
            Step::Show { item } => {
                picker.set_current_item_showing(item);
                continue;
            }
            Step::SetHour { hour } => {
                ClockTime::new(hour, 0)?;
                picker.set_current_hour(hour)
            }
            Step::SetMinute { minute } => {
                ClockTime::new(0, minute)?;
                picker.set_current_minute(minute)
            }
            Step::SetAmPm { am_pm } => picker.set_am_pm(am_pm),
            Step::Adjust { step } => picker.adjust(step),
            Step::Enable { enabled } => {
                picker.set_input_enabled(enabled);
                continue;
            }
        };

        // Host-side auto-advance: a confirmed hour moves on to minutes.
        if let Some(selected) = result.selection
            && selected.auto_advance
            && selected.picker_type == PickerType::Hours
        {
            picker.set_current_item_showing(PickerType::Minutes);
        }
    }

    println!(
        "{:02}:{:02} {:?}",
        picker.current_hour(),
        picker.current_minute(),
        picker.am_pm()
    );
    Ok(())
}
