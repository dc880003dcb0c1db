
#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod user_derivation_tests;


#[cfg(test)]
mod sign_out_tests;

#[cfg(test)]
mod session_load_tests;

#[cfg(test)]
mod scroll_tests;

#[cfg(test)]
mod shell_render_tests;
