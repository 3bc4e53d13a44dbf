mod setup;

mod withdrawal;
