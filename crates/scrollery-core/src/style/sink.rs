use std::cell::RefCell;
use std::rc::Rc;

/// Style and class mutations on a single target element
pub trait StyleSink {
    fn set_style(&mut self, property: &str, value: &str);

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);
}

impl<S: StyleSink + ?Sized> StyleSink for Rc<RefCell<S>> {
    fn set_style(&mut self, property: &str, value: &str) {
        self.borrow_mut().set_style(property, value);
    }

    fn add_class(&mut self, class: &str) {
        self.borrow_mut().add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        self.borrow_mut().remove_class(class);
    }
}
