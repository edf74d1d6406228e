mod bilateral;
mod tri_modal;
