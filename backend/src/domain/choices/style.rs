//! Colour schemes for the highlight page.

use super::define_choices;

define_choices! {
    /// Highlight colour scheme. Labels repeat the value.
    pub enum Style as "style", default Friendly {
        Abap => ("abap", "abap"),
        Algol => ("algol", "algol"),
        AlgolNu => ("algol_nu", "algol_nu"),
        Arduino => ("arduino", "arduino"),
        Autumn => ("autumn", "autumn"),
        Borland => ("borland", "borland"),
        Bw => ("bw", "bw"),
        Colorful => ("colorful", "colorful"),
        Default => ("default", "default"),
        Emacs => ("emacs", "emacs"),
        Friendly => ("friendly", "friendly"),
        Fruity => ("fruity", "fruity"),
        Igor => ("igor", "igor"),
        Inkpot => ("inkpot", "inkpot"),
        Lovelace => ("lovelace", "lovelace"),
        Manni => ("manni", "manni"),
        Material => ("material", "material"),
        Monokai => ("monokai", "monokai"),
        Murphy => ("murphy", "murphy"),
        Native => ("native", "native"),
        ParaisoDark => ("paraiso-dark", "paraiso-dark"),
        ParaisoLight => ("paraiso-light", "paraiso-light"),
        Pastie => ("pastie", "pastie"),
        Perldoc => ("perldoc", "perldoc"),
        RainbowDash => ("rainbow_dash", "rainbow_dash"),
        Rrt => ("rrt", "rrt"),
        Sas => ("sas", "sas"),
        SolarizedDark => ("solarized-dark", "solarized-dark"),
        SolarizedLight => ("solarized-light", "solarized-light"),
        Stata => ("stata", "stata"),
        StataDark => ("stata-dark", "stata-dark"),
        StataLight => ("stata-light", "stata-light"),
        Tango => ("tango", "tango"),
        Trac => ("trac", "trac"),
        Vim => ("vim", "vim"),
        Vs => ("vs", "vs"),
        Xcode => ("xcode", "xcode"),
        Zenburn => ("zenburn", "zenburn"),
    }
}
