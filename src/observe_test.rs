use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn subscription_disposes_once_on_drop() {
    let count = Rc::new(Cell::new(0));
    {
        let count = Rc::clone(&count);
        let _sub = Subscription::new(move || count.set(count.get() + 1));
    }
    assert_eq!(count.get(), 1);
}

#[test]
fn explicit_dispose_does_not_rerun_on_drop() {
    let count = Rc::new(Cell::new(0));
    let sub = {
        let count = Rc::clone(&count);
        Subscription::new(move || count.set(count.get() + 1))
    };
    sub.dispose();
    assert_eq!(count.get(), 1);
}

#[test]
fn options_builders_set_thresholds_and_margin() {
    let single = ObserverOptions::threshold(0.18);
    assert_eq!(single.thresholds, vec![0.18]);
    assert_eq!(single.root_margin, None);

    let multi = ObserverOptions::thresholds(&[0.05, 0.1, 0.2]).with_root_margin("-25% 0px -65% 0px");
    assert_eq!(multi.thresholds.len(), 3);
    assert_eq!(multi.root_margin, Some("-25% 0px -65% 0px"));
}
