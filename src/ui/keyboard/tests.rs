use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, animation_active: bool) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = match &event {
        egui::Event::Key { modifiers, .. } => *modifiers,
        _ => egui::Modifiers::default(),
    };
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, animation_active);
        });
    });

    events
}

#[test]
fn test_s_emits_save_intent_in_both_modes() {
    for animation_active in [false, true] {
        let events = collect_with_key_event(
            key_event(egui::Key::S, egui::Modifiers::default()),
            animation_active,
        );

        assert_eq!(events, vec![AppIntent::SaveDrawingRequested]);
    }
}

#[test]
fn test_t_toggles_pens_only_when_animating() {
    let events = collect_with_key_event(key_event(egui::Key::T, egui::Modifiers::default()), true);
    assert_eq!(events, vec![AppIntent::TogglePensRequested]);

    let events = collect_with_key_event(key_event(egui::Key::T, egui::Modifiers::default()), false);
    assert!(events.is_empty());
}

#[test]
fn test_space_restarts_only_when_animating() {
    let events = collect_with_key_event(
        key_event(egui::Key::Space, egui::Modifiers::default()),
        true,
    );
    assert_eq!(events, vec![AppIntent::RestartRequested]);

    let events = collect_with_key_event(
        key_event(egui::Key::Space, egui::Modifiers::default()),
        false,
    );
    assert!(events.is_empty());
}

#[test]
fn test_command_modifier_suppresses_shortcuts() {
    let events = collect_with_key_event(key_event(egui::Key::S, egui::Modifiers::COMMAND), true);

    assert!(events.is_empty());
}
