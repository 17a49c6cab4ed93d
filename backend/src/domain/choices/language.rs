//! Languages accepted for snippets.

use super::define_choices;

define_choices! {
    /// Source language of a snippet, named by its highlighter alias.
    pub enum Language as "language", default Python {
        Bash => ("bash", "Bash"),
        C => ("c", "C"),
        Clojure => ("clojure", "Clojure"),
        Cpp => ("cpp", "C++"),
        CSharp => ("csharp", "C#"),
        Css => ("css", "CSS"),
        Dart => ("dart", "Dart"),
        Diff => ("diff", "Diff"),
        Docker => ("docker", "Docker"),
        Elixir => ("elixir", "Elixir"),
        Erlang => ("erlang", "Erlang"),
        Go => ("go", "Go"),
        Haskell => ("haskell", "Haskell"),
        Html => ("html", "HTML"),
        Ini => ("ini", "INI"),
        Java => ("java", "Java"),
        JavaScript => ("javascript", "JavaScript"),
        Json => ("json", "JSON"),
        Julia => ("julia", "Julia"),
        Kotlin => ("kotlin", "Kotlin"),
        Lua => ("lua", "Lua"),
        Make => ("make", "Makefile"),
        Markdown => ("markdown", "Markdown"),
        ObjectiveC => ("objective-c", "Objective-C"),
        OCaml => ("ocaml", "OCaml"),
        Perl => ("perl", "Perl"),
        Php => ("php", "PHP"),
        PowerShell => ("powershell", "PowerShell"),
        Python => ("python", "Python"),
        Python2 => ("python2", "Python 2.x"),
        Ruby => ("ruby", "Ruby"),
        Rust => ("rust", "Rust"),
        Scala => ("scala", "Scala"),
        Scheme => ("scheme", "Scheme"),
        Sql => ("sql", "SQL"),
        Swift => ("swift", "Swift"),
        Text => ("text", "Text only"),
        Toml => ("toml", "TOML"),
        TypeScript => ("typescript", "TypeScript"),
        Xml => ("xml", "XML"),
        Yaml => ("yaml", "YAML"),
    }
}
