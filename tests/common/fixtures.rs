//! Shared test input: a navigation data file in the shape a documentation
//! generator emits, banner comment included.

pub const GENERATED_NAV_SOURCE: &str = r#"/*
 @licstart  The following is the entire license notice for the
 JavaScript code in this file.

 Generated navigation data. Do not edit.

 @licend  The above is the entire license notice
*/
var NAVTREE =
[
  [ "Example Engine", "index.html", [
    [ "Overview", "index.html#overview", null ],
    [ "Guides", "guides.html", [
      [ "Getting Started", "guides.html#getting_started", null ],
      [ "Configuration", "guides.html#configuration", null ]
    ] ],
    [ "Modules", "modules.html", "modules" ],
    [ "Files", "files.html", [
      [ "File List", "files.html", "files_dup" ],
      [ "Globals", "globals.html", null ]
    ] ]
  ] ]
];

var NAVTREEINDEX =
[
"annotated.html",
"files.html",
"guides.html#getting_started"
];

var SYNCONMSG = 'click to disable panel synchronisation';
var SYNCOFFMSG = 'click to enable panel synchronisation';
"#;
