// Demo: the four periodicity configurations side by side, dragged diagonally.
use periodic_scroll::{PeriodicScrollOptions, PeriodicityMode, Size};
use periodic_scroll_adapter::{Controller, Easing};

fn main() {
    let content = Size::new(300.0, 400.0);
    let viewport = Size::new(200.0, 200.0);

    for mode in PeriodicityMode::ALL {
        let options = PeriodicScrollOptions::new(mode, content)
            .with_on_scroll(Some(|ev: periodic_scroll::ScrollEvent| {
                if !ev.wrap.is_none() {
                    println!("  wrap {:?} -> offset {:?}", ev.wrap, ev.offset);
                }
            }));
        let mut c: Controller<&str> = Controller::new(viewport, options).expect("valid options");
        c.view_mut().content_surface_mut().add_child("grid");

        println!("{mode}: tiled={:?}", c.view().geometry().tiled_size());
        for _ in 0..40 {
            c.on_drag(25.0, 25.0);
        }
        println!(
            "  after drag: offset={:?} logical={:?} wraps={}",
            c.offset(),
            c.view().logical_offset(),
            c.view().wrap_count()
        );

        c.start_scroll_by(-900.0, -1200.0, 0, 48, Easing::EaseInOutCubic);
        let mut now_ms = 0;
        while c.is_animating() {
            c.tick(now_ms);
            now_ms += 1;
        }
        println!(
            "  after tween: offset={:?} logical={:?} wraps={}",
            c.offset(),
            c.view().logical_offset(),
            c.view().wrap_count()
        );
    }
}
