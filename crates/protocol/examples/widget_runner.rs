//! Registers one widget of each kind and prints a few registry queries.
//!
//! Run with `RUST_LOG=debug` to see trigger and registration logs.

use protocol::prelude::*;

fn main() -> Result<(), WidgetError> {
    protocol::init(&Config::default());

    let mut registry = Registry::new();

    let button = registry
        .add_button()
        .named("id", 1)
        .on_trigger(|args| {
            let target: u64 = args.get("id")?;
            tracing::info!("button pressed, looking up widget #{}", target);
            Ok(())
        })
        .build();
    let visor = registry.add_toggle().label("Visor").build();
    let brightness = registry.add_slider().label("Brightness").range(0, 255).value(128).build()?;

    registry.trigger(button)?;
    registry.toggle(visor)?;
    registry.set_value(brightness, 200)?;

    if let Err(err) = registry.set_value(brightness, 300) {
        tracing::warn!("rejected: {}", err);
    }

    println!("Buttons and sliders:");
    for (id, widget) in registry.get_all(WidgetKind::Button | WidgetKind::Slider, IdFilter::Any) {
        println!("  {id}: {widget}");
    }

    println!("Toggles:");
    for widget in registry.get_all(WidgetKind::Toggle, IdFilter::Any).values() {
        println!("  {widget}");
    }

    println!("Ids 0 and 1: {:?}", registry.get_all(WidgetKinds::all(), [0u64, 1]).keys().collect::<Vec<_>>());
    println!("Toggles among ids 0..2: {}", registry.get_all(WidgetKind::Toggle, 0u64..2).len());

    for record in registry.records() {
        println!("{}", record.to_json());
    }

    Ok(())
}
