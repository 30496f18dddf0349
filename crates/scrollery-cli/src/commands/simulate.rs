use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use tracing::debug;

use scrollery_core::{
    AnimationBinding, AppConfig, ChangeEvent, ElementStyle, ScrollController, ScrollDriver,
    ScrollTracker,
};

use crate::scene::Scene;

type Element = (String, Rc<RefCell<ElementStyle>>);

pub async fn run(config: &AppConfig, scene_path: &Path, offsets: Option<Vec<f64>>) -> Result<()> {
    let scene = Scene::load(scene_path)?;
    let offsets = offsets.unwrap_or_else(|| scene.offsets.clone());

    for line in replay(config, &scene, &offsets).await? {
        println!("{}", line);
    }
    Ok(())
}

/// Scroll through `offsets` one after another and report every frame
pub async fn replay(config: &AppConfig, scene: &Scene, offsets: &[f64]) -> Result<Vec<String>> {
    if offsets.is_empty() {
        bail!("No scroll offsets given: pass --offsets or set `offsets` in the scene");
    }

    let structure = Rc::new(config.step_structure()?);
    let position = Rc::new(Cell::new(0.0));
    let tracker = ScrollTracker::new(Rc::clone(&structure), config.tracker.clone());
    let mut controller = ScrollController::new(tracker, Rc::clone(&position));

    let mut elements: Vec<Element> = Vec::with_capacity(scene.elements.len());
    for element in &scene.elements {
        let style = Rc::new(RefCell::new(ElementStyle::with_classes(
            element.classes.iter().cloned(),
        )));
        let binding = AnimationBinding::bind(
            &element.animations,
            Rc::clone(&structure),
            Rc::clone(&style),
        )
        .with_context(|| format!("Invalid animations for element '{}'", element.name))?
        .with_style_properties(config.animation.style_properties.iter().cloned());

        debug!("Bound element '{}'", element.name);
        controller.subscribe(binding);
        elements.push((element.name.clone(), style));
    }

    let output = Rc::new(RefCell::new(vec![format!(
        "Simulating {} element(s) over {} offset(s)\n",
        elements.len(),
        offsets.len()
    )]));

    // Subscribed last so it sees every binding's styles for the frame
    let report = Rc::clone(&output);
    controller.subscribe(move |event: &ChangeEvent| -> scrollery_core::Result<()> {
        report.borrow_mut().push(format_frame(event, &elements));
        Ok(())
    });

    let mut driver = ScrollDriver::new(controller, config.tracker.tick_interval());
    for &y in offsets {
        position.set(y);
        if driver.drive_until_idle().await == 0 {
            output.borrow_mut().push(format!("y={}: no change", y));
        }
    }

    let state = driver.controller().state();
    output.borrow_mut().push(format!(
        "Final position: y={} step={}",
        state.current_y, state.current_step
    ));

    let lines = output.borrow().clone();
    Ok(lines)
}

fn format_frame(event: &ChangeEvent, elements: &[Element]) -> String {
    let mut frame = format!("y={} step {} -> {}\n", event.y, event.old_step, event.new_step);
    for (name, style) in elements {
        let style = style.borrow();
        let classes = if style.classes().is_empty() {
            String::new()
        } else {
            format!(" [class: {}]", style.classes().join(" "))
        };
        frame.push_str(&format!("  {}: {}{}\n", name, style.css_text(), classes));
    }
    frame
}
