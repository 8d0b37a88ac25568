use crate::option::ConfOption;

/// Give every option no source has set its declared default.
pub fn fill_defaults<C>(options: &[ConfOption<C>], config: &mut C) {
    for opt in options.iter().filter(|o| !o.is_done()) {
        opt.set_default(config);
    }
}

/// Release every owned value, whatever the option's state. Idempotent.
pub fn free_all<C>(options: &[ConfOption<C>], config: &mut C) {
    for opt in options {
        opt.free(config);
    }
}
