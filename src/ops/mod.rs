pub mod notify;
pub mod task_list;
