use pagify::{LayoutConfig, Pagify, TurnUnit};
use pagify_adapter::ViewportBinding;

fn main() {
    // Example: a host frame loop driving throttled triggers and tween transitions.
    //
    // A host would:
    // - forward key/button presses as triggers
    // - call tick(now_ms) every frame and write the returned offset into its viewport
    let config = LayoutConfig::new(50.0, 50.0)
        .with_turn_unit(TurnUnit::Column)
        .with_throttle_window_ms(120)
        .with_transition_duration_ms(200);
    let engine = Pagify::with_pages(config, 1..=24u64).expect("valid layout");
    let mut b = ViewportBinding::with_tween(engine);

    // A burst of presses: the first turns immediately, the rest collapse into one deferred turn.
    for now_ms in [0u64, 16, 32, 48] {
        b.forward(now_ms);
    }

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        let offset = b.tick(now_ms);
        if let Some(off) = offset {
            if now_ms % 64 == 0 {
                println!(
                    "t={now_ms} off={off:.1}% page={}",
                    b.engine().current_page()
                );
            }
        } else if b.next_deadline_ms().is_none() {
            break;
        }
    }

    println!(
        "done: page={} offset={}%",
        b.engine().current_page(),
        b.engine().offset_percent()
    );
}
