//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> String {
    r##"# Dev-ER Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Dev-ER"
# width = 1024
# height = 726
# hide_on_close = true   # closing hides to tray unless quitting

[workspace]
# home_url = "https://portal.dever.app/"
# panel_toolbar_height = 40   # used until the UI measures its toolbar
# modal_toolbar_height = 48
# devtools = false

[links]
# route = "modal"          # modal | panel | external
# in_place = "same-origin" # same-origin | always | never

[paths]
# public = "/path/to/public"
# sdk_resources = "/path/to/sdk_resources"
# logs = "/path/to/logs"
# ui = "/path/to/ui"     # bundled main UI; DEVER_DEV_SERVER_URL overrides

[logging]
# level = "dever=info"
"##
    .to_string()
}
