//! Built-in standard form

/// Form loaded by the "load standard form" action
pub const REFERENCE_FORM: &str = r#"
<form>
  <field id="1">
    <type>text</type>
    <label>First Name:</label>
  </field>
  <field id="2">
    <type>text</type>
    <label>Last Name:</label>
  </field>
  <field id="3">
    <type>date</type>
    <label>Date of Birth:</label>
  </field>
  <field id="4">
    <type>radio</type>
    <label>Gender:</label>
    <options>
      <option id="male">
        <value>Male</value>
        <label>Male</label>
      </option>
      <option id="female">
        <value>Female</value>
        <label>Female</label>
      </option>
    </options>
  </field>
  <field id="5">
    <type>drawing</type>
    <label>Signature:</label>
  </field>
</form>
"#;
