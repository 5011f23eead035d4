// tabrecall services
// The view-state service is the plugin's single stateful component; the host
// drives it through event handler methods.

pub mod view_state;
